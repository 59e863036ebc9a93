// crates/core/src/press_release.rs
//! Press-release assembly.
//!
//! The release is an ordered sequence of section strings joined with a
//! blank line. Each section builder is independently testable and every
//! optional clause null-checks its own fields, so missing data drops the
//! clause instead of faulting.

use crate::format::{format_value, ordinal};
use crate::rankings::{
    collect_rankings, other_entries, strong_entries, RankingEntry, STRONG_RANK_CUTOFF,
};
use crate::types::{MarketRecord, Metric};

/// Static press contact printed in the About section and the fallback.
pub const PRESS_CONTACT: &str = "press@presskitmarkets.com";

/// Generate the full press release for one market.
///
/// A record with zero ranked metrics gets a minimal fallback document
/// with no rankings section.
pub fn generate_press_release(record: &MarketRecord) -> String {
    let rankings = collect_rankings(record);
    let name = record.display_name();

    let Some(headline) = rankings.first() else {
        return fallback_release(&name);
    };

    let mut sections: Vec<String> = Vec::new();
    sections.push(title_section(&name, headline));
    sections.push(opening_paragraph(&name, headline));
    sections.push(performance_overview(&name, &rankings));
    if let Some(dynamics) = regional_dynamics(&name, record) {
        sections.push(dynamics);
    }
    sections.push(detailed_metrics(&rankings));
    sections.push(market_strengths(&name, record));
    sections.push(outlook_section());
    sections.push(about_section());
    sections.join("\n\n")
}

fn fallback_release(name: &str) -> String {
    format!(
        "<strong>{name} Short-Term Rental Market Report</strong>\n\n\
         Market data is available for {name}. National rankings for this market \
         will be published once enough reporting periods have been collected. \
         For press inquiries, contact {PRESS_CONTACT}."
    )
}

fn title_section(name: &str, headline: &RankingEntry) -> String {
    format!(
        "<strong>{} Ranks {} Nationally in {} Among U.S. Short-Term Rental Markets</strong>",
        name,
        ordinal(headline.rank),
        headline.label
    )
}

fn opening_paragraph(name: &str, headline: &RankingEntry) -> String {
    format!(
        "{} has claimed the {} spot nationally in {}, posting {} and securing its \
         place among the country's standout short-term rental markets.",
        name,
        ordinal(headline.rank),
        headline.label,
        format_value(headline.metric, headline.value)
    )
}

/// Mentions up to two strong metrics beyond the headline one.
fn performance_overview(name: &str, rankings: &[RankingEntry]) -> String {
    let mut out = String::from("<strong>Market Performance Overview</strong>\n\n");
    let extras: Vec<&RankingEntry> = rankings
        .iter()
        .skip(1)
        .filter(|e| e.rank <= STRONG_RANK_CUTOFF)
        .take(2)
        .collect();

    match extras.as_slice() {
        [] => out.push_str(&format!(
            "{}'s headline ranking stands on its own this period, with the market's \
             remaining metrics still climbing the national table.",
            name
        )),
        [a] => out.push_str(&format!(
            "The strength runs deeper than a single number: {} also places {} \
             nationally in {} at {}.",
            name,
            ordinal(a.rank),
            a.label,
            format_value(a.metric, a.value)
        )),
        [a, b, ..] => out.push_str(&format!(
            "The strength runs deeper than a single number: {} also places {} in {} \
             ({}) and {} in {} ({}).",
            name,
            ordinal(a.rank),
            a.label,
            format_value(a.metric, a.value),
            ordinal(b.rank),
            b.label,
            format_value(b.metric, b.value)
        )),
    }
    out
}

/// Revenue-led section. Only emitted when revenue is fully present with a
/// strong rank; the listings clause independently checks its own field.
fn regional_dynamics(name: &str, record: &MarketRecord) -> Option<String> {
    let revenue = record.total_revenue?;
    let rank = record.total_revenue_rank?;
    if rank > STRONG_RANK_CUTOFF {
        return None;
    }

    let mut out = format!(
        "<strong>Regional Market Dynamics</strong>\n\n\
         {} generated {} in annual short-term rental revenue, good for {} nationally.",
        name,
        format_value(Metric::TotalRevenue, revenue),
        ordinal(rank)
    );
    if let Some(listings) = record.total_listings {
        out.push_str(&format!(
            " That revenue is spread across {} active listings, a depth of inventory \
             that keeps the market working for guests and operators alike.",
            format_value(Metric::TotalListings, listings)
        ));
    }
    Some(out)
}

/// Bulleted list of strong-rank metrics, then the remaining ranked metrics
/// under a secondary heading. Both lists inherit the ascending rank order.
fn detailed_metrics(rankings: &[RankingEntry]) -> String {
    let mut out = String::from("<strong>Detailed Performance Metrics</strong>");
    for entry in strong_entries(rankings) {
        out.push_str(&metric_bullet(entry));
    }

    let other = other_entries(rankings);
    if !other.is_empty() {
        out.push_str("\n\n<strong>Additional Rankings</strong>");
        for entry in other {
            out.push_str(&metric_bullet(entry));
        }
    }
    out
}

fn metric_bullet(entry: &RankingEntry) -> String {
    format!(
        "\n- {}: {} nationally ({})",
        entry.label,
        ordinal(entry.rank),
        format_value(entry.metric, entry.value)
    )
}

/// Occupancy and gross yield appear only with strong ranks; nightly rate
/// appears whenever the value is present.
fn market_strengths(name: &str, record: &MarketRecord) -> String {
    let mut out = format!(
        "<strong>Market Strengths and Contributing Factors</strong>\n\n\
         Several factors underpin {}'s showing this period.",
        name
    );

    if let (Some(occupancy), Some(rank)) = (record.occupancy, record.occupancy_rank) {
        if rank <= STRONG_RANK_CUTOFF {
            out.push_str(&format!(
                " An occupancy rate of {} keeps calendars full well outside peak season.",
                format_value(Metric::Occupancy, occupancy)
            ));
        }
    }
    if let (Some(gross_yield), Some(rank)) = (record.gross_yield, record.gross_yield_rank) {
        if rank <= STRONG_RANK_CUTOFF {
            out.push_str(&format!(
                " A gross yield of {} makes this one of the more capital-efficient \
                 markets in the country to operate in.",
                format_value(Metric::GrossYield, gross_yield)
            ));
        }
    }
    if let Some(rate) = record.nightly_rate {
        out.push_str(&format!(
            " Guests pay an average of {} per night, supporting healthy margins for hosts.",
            format_value(Metric::NightlyRate, rate)
        ));
    }
    out
}

fn outlook_section() -> String {
    "<strong>2026 Outlook</strong>\n\
     - Travel demand is projected to keep shifting toward mid-size leisure markets.\n\
     - Supply growth is expected to stay measured, supporting occupancy and nightly rates.\n\
     - Markets with diversified demand drivers are best positioned to hold their rankings."
        .to_string()
}

fn about_section() -> String {
    format!(
        "<strong>About PressKit Markets</strong>\n\n\
         PressKit Markets tracks short-term rental performance across U.S. cities, \
         publishing rankings, market reports, and press materials for media and \
         investors. For press inquiries, contact {PRESS_CONTACT}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn austin() -> MarketRecord {
        MarketRecord {
            city: "Austin".to_string(),
            state: Some("TX".to_string()),
            gross_yield: Some(7.5),
            gross_yield_rank: Some(12),
            total_revenue: Some(50_000_000.0),
            total_revenue_rank: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn test_headline_uses_best_rank() {
        let release = generate_press_release(&austin());
        let title = release.lines().next().unwrap();
        assert!(title.contains("8th"), "best rank leads the title: {title}");
        assert!(title.contains("Total Revenue"));
        assert!(title.contains("Austin, TX"));
    }

    #[test]
    fn test_detailed_metrics_lists_both_strong_ranks() {
        let release = generate_press_release(&austin());
        assert!(release.contains("<strong>Detailed Performance Metrics</strong>"));
        assert!(release.contains("- Total Revenue: 8th nationally ($50,000,000)"));
        assert!(release.contains("- Gross Yield: 12th nationally (7.50%)"));
        assert!(!release.contains("Additional Rankings"));
    }

    #[test]
    fn test_strong_bullets_are_ascending_and_capped_at_25() {
        let mut record = austin();
        record.occupancy = Some(61.5);
        record.occupancy_rank = Some(20);
        record.nightly_rate = Some(245.0);
        record.nightly_rate_rank = Some(90);
        let release = generate_press_release(&record);

        let section = release
            .split("<strong>Detailed Performance Metrics</strong>")
            .nth(1)
            .unwrap()
            .split("<strong>Additional Rankings</strong>")
            .next()
            .unwrap();
        let ranks: Vec<u32> = section
            .lines()
            .filter(|l| l.starts_with("- "))
            .map(|l| {
                let start = l.find(": ").unwrap() + 2;
                let end = l[start..].find(|c: char| !c.is_ascii_digit()).unwrap();
                l[start..start + end].parse().unwrap()
            })
            .collect();
        assert_eq!(ranks, vec![8, 12, 20]);
        assert!(ranks.iter().all(|&r| r <= 25));
        assert!(release.contains("<strong>Additional Rankings</strong>"));
        assert!(release.contains("- Nightly Rate: 90th nationally ($245.00)"));
    }

    #[test]
    fn test_zero_ranked_metrics_returns_fallback() {
        let record = MarketRecord {
            city: "Boise".to_string(),
            state: Some("ID".to_string()),
            nightly_rate: Some(180.0), // value without rank stays unranked
            ..Default::default()
        };
        let release = generate_press_release(&record);
        assert!(release.contains("Market data is available"));
        assert!(!release.contains("Detailed Performance Metrics"));
        assert!(!release.contains("nationally"));
    }

    #[test]
    fn test_absent_gross_yield_omits_strengths_clause() {
        let record = MarketRecord {
            city: "Austin".to_string(),
            state: Some("TX".to_string()),
            total_revenue: Some(50_000_000.0),
            total_revenue_rank: Some(8),
            ..Default::default()
        };
        let release = generate_press_release(&record);
        let strengths = release
            .split("<strong>Market Strengths and Contributing Factors</strong>")
            .nth(1)
            .unwrap()
            .split("<strong>")
            .next()
            .unwrap();
        assert!(!strengths.contains("Gross Yield"));
        assert!(!strengths.contains("gross yield"));
    }

    #[test]
    fn test_regional_dynamics_requires_strong_revenue_rank() {
        let mut record = austin();
        record.total_revenue_rank = Some(40);
        // Gross yield (12th) becomes the headline; revenue rank 40 is too
        // weak for the regional section.
        let release = generate_press_release(&record);
        assert!(!release.contains("Regional Market Dynamics"));

        let release = generate_press_release(&austin());
        assert!(release.contains("Regional Market Dynamics"));
        assert!(release.contains("$50,000,000"));
    }

    #[test]
    fn test_regional_dynamics_listings_clause_is_independent() {
        let mut record = austin();
        record.total_listings = Some(12_400.0);
        let release = generate_press_release(&record);
        assert!(release.contains("12,400 active listings"));

        let release_without = generate_press_release(&austin());
        assert!(!release_without.contains("active listings"));
    }

    #[test]
    fn test_fixed_boilerplate_sections_present() {
        let release = generate_press_release(&austin());
        assert!(release.contains("<strong>2026 Outlook</strong>"));
        assert!(release.contains("<strong>About PressKit Markets</strong>"));
        assert!(release.contains(PRESS_CONTACT));
    }

    #[test]
    fn test_deterministic_output() {
        let record = austin();
        assert_eq!(generate_press_release(&record), generate_press_release(&record));
    }

    #[test]
    fn test_sections_joined_by_blank_lines() {
        let release = generate_press_release(&austin());
        assert!(release.contains("</strong>\n\n"));
        assert!(!release.contains("\n\n\n"));
    }
}
