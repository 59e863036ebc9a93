// crates/core/src/news_article.rs
//! News-article assembly: three structural variants over one market.
//!
//! The variant selector is an arbitrary integer reduced mod 3 (Euclidean,
//! so negative selectors behave). All three variants share the section
//! builders in the lower half of this file; what differs is the lead and
//! the section order.

use crate::format::{format_value, ordinal, percent_above_average};
use crate::rankings::{
    collect_rankings, RankingEntry, MODERATE_RANK_CUTOFF, STRONG_RANK_CUTOFF,
};
use crate::types::{AverageStatistics, MarketRecord, Metric};

/// Brand mention woven into leads and closings.
pub const BRAND: &str = "PressKit Markets";

/// Claim strength for the headline and lead, keyed off the best rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankTier {
    /// Best rank 10 or better.
    Elite,
    /// Best rank 25 or better.
    Strong,
    /// Best rank 50 or better.
    Moderate,
    /// Everything else.
    Emerging,
}

fn tier_for(rank: u32) -> RankTier {
    if rank <= 10 {
        RankTier::Elite
    } else if rank <= STRONG_RANK_CUTOFF {
        RankTier::Strong
    } else if rank <= MODERATE_RANK_CUTOFF {
        RankTier::Moderate
    } else {
        RankTier::Emerging
    }
}

/// Generate one news-article variant for a market.
///
/// `variant` has period 3: `v` and `v + 3` select the same structure.
/// A record with zero ranked metrics gets a generic "newly tracked"
/// article rather than faulting on a missing best entry.
pub fn generate_news_article(
    record: &MarketRecord,
    averages: &AverageStatistics,
    total_markets: usize,
    variant: i64,
) -> String {
    let selected = variant.rem_euclid(3);
    let rankings = collect_rankings(record);
    let name = record.display_name();

    let Some(best) = rankings.first() else {
        return unranked_article(&name, total_markets);
    };
    let tier = tier_for(best.rank);

    let mut sections: Vec<String> = Vec::new();
    match selected {
        0 => {
            sections.push(headline_best_ranking(&name, best, tier));
            sections.push(lead_best_ranking(&name, best, tier, total_markets));
            if let Some(comparison) = revenue_yield_comparison(record, averages) {
                sections.push(comparison);
            }
            sections.push(why_it_matters(&name, &rankings));
            if let Some(occupancy) = occupancy_rate_section(record, averages) {
                sections.push(occupancy);
            }
            if let Some(per_listing) = revenue_per_listing_section(record, averages) {
                sections.push(per_listing);
            }
            sections.push(bigger_picture(&name, record, total_markets));
        }
        1 => {
            sections.push(headline_real_estate(&name, best, tier));
            sections.push(lead_real_estate(&name, best, tier, total_markets));
            sections.push(real_estate_context());
            if let Some(occupancy) = occupancy_rate_section(record, averages) {
                sections.push(occupancy);
            }
            if let Some(comparison) = revenue_yield_comparison(record, averages) {
                sections.push(comparison);
            }
            if let Some(per_listing) = revenue_per_listing_section(record, averages) {
                sections.push(per_listing);
            }
            sections.push(bigger_picture(&name, record, total_markets));
        }
        _ => {
            sections.push(headline_investment(&name, best, tier));
            sections.push(lead_investment(&name, best, tier, total_markets));
            sections.push(data_dump(record, &rankings));
            if let Some(deep_dive) = yield_deep_dive(record, averages) {
                sections.push(deep_dive);
            }
            sections.push(why_it_matters(&name, &rankings));
            sections.push(bigger_picture(&name, record, total_markets));
        }
    }
    sections.join("\n\n")
}

fn unranked_article(name: &str, total_markets: usize) -> String {
    format!(
        "<h1>{name} Joins the National Short-Term Rental Rankings</h1>\n\n\
         {BRAND} has begun tracking {name} among the {total_markets} short-term \
         rental markets it covers nationwide. National rankings for the market \
         will be published once enough reporting periods are in; early data is \
         being collected now."
    )
}

// ---------------------------------------------------------------------------
// Variant 0: lead with the best ranking.
// ---------------------------------------------------------------------------

fn headline_best_ranking(name: &str, best: &RankingEntry, tier: RankTier) -> String {
    match tier {
        RankTier::Elite => format!(
            "<h1>{} Breaks Into the Top 10 U.S. Markets for {}</h1>",
            name, best.label
        ),
        RankTier::Strong => format!(
            "<h1>{} Climbs to {} Nationally in {}</h1>",
            name,
            ordinal(best.rank),
            best.label
        ),
        RankTier::Moderate => format!(
            "<h1>{} Lands in the Top 50 U.S. Markets for {}</h1>",
            name, best.label
        ),
        RankTier::Emerging => {
            format!("<h1>{}'s Short-Term Rental Market Is One to Watch</h1>", name)
        }
    }
}

fn lead_best_ranking(name: &str, best: &RankingEntry, tier: RankTier, total: usize) -> String {
    match tier {
        RankTier::Elite => format!(
            "{} now ranks {} out of {} markets tracked by {} for {}, a result that \
             puts it squarely among the strongest short-term rental markets in the country.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
        RankTier::Strong => format!(
            "{} has climbed to {} nationally in {} among the {} markets tracked by {}, \
             a showing that puts it comfortably inside the top tier.",
            name,
            ordinal(best.rank),
            best.label,
            total,
            BRAND
        ),
        RankTier::Moderate => format!(
            "{} ranks {} of the {} markets tracked by {} for {}, inside the top 50 \
             and moving in the right direction.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
        RankTier::Emerging => format!(
            "{} currently sits {} of the {} markets tracked by {} for {}, a market \
             still building its national case.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
    }
}

// ---------------------------------------------------------------------------
// Variant 1: real-estate angle.
// ---------------------------------------------------------------------------

fn headline_real_estate(name: &str, best: &RankingEntry, tier: RankTier) -> String {
    match tier {
        RankTier::Elite => format!(
            "<h1>What {}'s Top-10 {} Ranking Means for Local Real Estate</h1>",
            name, best.label
        ),
        RankTier::Strong => format!(
            "<h1>{}'s {} Ranking Is a Signal for Home Buyers</h1>",
            name, best.label
        ),
        RankTier::Moderate => format!(
            "<h1>{} Real Estate Gets a Modest Boost From Short-Term Rentals</h1>",
            name
        ),
        RankTier::Emerging => format!(
            "<h1>Short-Term Rentals Are a Quiet Factor in {} Real Estate</h1>",
            name
        ),
    }
}

fn lead_real_estate(name: &str, best: &RankingEntry, tier: RankTier, total: usize) -> String {
    match tier {
        RankTier::Elite => format!(
            "A top-10 national finish in {} ({} of the {} markets tracked by {}) is \
             the clearest signal yet that {}'s housing market has a demand engine \
             most cities lack.",
            best.label,
            ordinal(best.rank),
            total,
            BRAND,
            name
        ),
        RankTier::Strong => format!(
            "{}'s {} national ranking in {}, out of the {} markets tracked by {}, is \
             starting to show up in conversations about the local housing market.",
            name,
            ordinal(best.rank),
            best.label,
            total,
            BRAND
        ),
        RankTier::Moderate => format!(
            "{} ranks {} of the {} markets {} tracks for {}, a middling national \
             finish that still matters for anyone pricing property here.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
        RankTier::Emerging => format!(
            "{} has no headline ranking to point to yet ({} of {} in {}, per {}), \
             but the rental data is worth a look for buyers playing the long game.",
            name,
            ordinal(best.rank),
            total,
            best.label,
            BRAND
        ),
    }
}

/// Fixed explainer on why rental strength tracks real-estate health.
fn real_estate_context() -> String {
    "Short-term rental performance is increasingly read as a leading indicator \
     for residential real estate. Strong occupancy and nightly rates signal travel \
     demand, which tends to precede relocation demand, and investors who buy for \
     rental income add a resilient floor under transaction volume."
        .to_string()
}

// ---------------------------------------------------------------------------
// Variant 2: investment / data angle.
// ---------------------------------------------------------------------------

fn headline_investment(name: &str, best: &RankingEntry, tier: RankTier) -> String {
    match tier {
        RankTier::Elite => format!(
            "<h1>The Numbers Behind {}'s Top-10 Run in {}</h1>",
            name, best.label
        ),
        RankTier::Strong => format!(
            "<h1>By the Numbers: {}'s Case as a Rental Investment Market</h1>",
            name
        ),
        RankTier::Moderate => {
            format!("<h1>A Data Check on {}'s Short-Term Rental Market</h1>", name)
        }
        RankTier::Emerging => {
            format!("<h1>Early Data on {}'s Short-Term Rental Market</h1>", name)
        }
    }
}

fn lead_investment(name: &str, best: &RankingEntry, tier: RankTier, total: usize) -> String {
    match tier {
        RankTier::Elite => format!(
            "Strip away the narrative and the numbers carry {} on their own: {} of \
             the {} markets tracked by {} in {}, with supporting data to match.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
        RankTier::Strong => format!(
            "{} makes a quantitative case for itself, ranking {} of the {} markets \
             tracked by {} in {}.",
            name,
            ordinal(best.rank),
            total,
            BRAND,
            best.label
        ),
        RankTier::Moderate => format!(
            "The dataset on {} reads as solid rather than spectacular: {} of {} \
             markets in {}, per {}.",
            name,
            ordinal(best.rank),
            total,
            best.label,
            BRAND
        ),
        RankTier::Emerging => format!(
            "{}'s dataset puts {} at {} of {} markets in {}, early innings by any reading.",
            BRAND,
            name,
            ordinal(best.rank),
            total,
            best.label
        ),
    }
}

/// Labeled value for every present metric, then the span from the best to
/// the worst present rank. Only called with a non-empty ranking list.
fn data_dump(record: &MarketRecord, rankings: &[RankingEntry]) -> String {
    let parts: Vec<String> = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            record
                .value(metric)
                .map(|value| format!("{}: {}", metric.label(), format_value(metric, value)))
        })
        .collect();

    let mut out = format!("The full picture: {}.", parts.join("; "));
    if let (Some(first), Some(last)) = (rankings.first(), rankings.last()) {
        if first.rank == last.rank {
            out.push_str(&format!(
                " Every ranked metric sits at {} nationally.",
                ordinal(first.rank)
            ));
        } else {
            out.push_str(&format!(
                " Across ranked metrics the market spans from {} at best to {} at worst.",
                ordinal(first.rank),
                ordinal(last.rank)
            ));
        }
    }
    out
}

/// Deep dive on whichever of gross yield / revenue per listing beats its
/// national average, gross yield first. Nothing qualifies, nothing emitted.
fn yield_deep_dive(record: &MarketRecord, averages: &AverageStatistics) -> Option<String> {
    if let Some(value) = record.gross_yield {
        if let Some(pct) = percent_above_average(value, averages.gross_yield) {
            if pct > 0 {
                return Some(format!(
                    "The yield story deserves its own paragraph: at {}, gross yield runs \
                     {}% above the national average, which is what turns a good market \
                     into an investable one.",
                    format_value(Metric::GrossYield, value),
                    pct
                ));
            }
        }
    }
    if let Some(value) = record.revenue_per_listing {
        if let Some(pct) = percent_above_average(value, averages.revenue_per_listing) {
            if pct > 0 {
                return Some(format!(
                    "Per-unit economics stand out here: the average listing earns {} a \
                     year, {}% above the national average.",
                    format_value(Metric::RevenuePerListing, value),
                    pct
                ));
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Shared section builders.
// ---------------------------------------------------------------------------

/// Requires both total revenue and gross yield; each above-average clause
/// independently guards a zero or absent average.
fn revenue_yield_comparison(
    record: &MarketRecord,
    averages: &AverageStatistics,
) -> Option<String> {
    let revenue = record.total_revenue?;
    let gross_yield = record.gross_yield?;

    let mut out = format!(
        "The market generated {} in annual revenue on a gross yield of {}.",
        format_value(Metric::TotalRevenue, revenue),
        format_value(Metric::GrossYield, gross_yield)
    );
    if let Some(pct) = percent_above_average(revenue, averages.total_revenue) {
        if pct > 0 {
            out.push_str(&format!(
                " That revenue figure is {}% above the national average.",
                pct
            ));
        }
    }
    if let Some(pct) = percent_above_average(gross_yield, averages.gross_yield) {
        if pct > 0 {
            out.push_str(&format!(" Yield, too, runs {}% above the typical market.", pct));
        }
    }
    Some(out)
}

fn why_it_matters(name: &str, rankings: &[RankingEntry]) -> String {
    let top_25 = rankings.iter().filter(|e| e.rank <= STRONG_RANK_CUTOFF).count();
    let top_50 = rankings.iter().filter(|e| e.rank <= MODERATE_RANK_CUTOFF).count();

    let body = if top_25 >= 2 {
        format!(
            "{} places {} of its tracked metrics in the national top 25, the kind of \
             breadth that separates durable markets from one-metric wonders.",
            name, top_25
        )
    } else if top_25 == 1 {
        let mut s = format!("{} holds one top-25 national ranking", name);
        if top_50 > top_25 {
            s.push_str(&format!(
                ", with {} more metric(s) inside the top 50 behind it.",
                top_50 - top_25
            ));
        } else {
            s.push_str(", and the rest of its metrics still have ground to cover.");
        }
        s
    } else if top_50 >= 1 {
        format!(
            "{} has no top-25 finish yet, but {} metric(s) inside the national top 50 \
             suggest the market is trending the right way.",
            name, top_50
        )
    } else {
        format!(
            "{} sits outside the national top 50 across the board, which for \
             contrarian investors is exactly when a market is worth studying.",
            name
        )
    };
    format!("<strong>Why it matters:</strong> {}", body)
}

/// Requires both occupancy and nightly rate values.
fn occupancy_rate_section(
    record: &MarketRecord,
    averages: &AverageStatistics,
) -> Option<String> {
    let occupancy = record.occupancy?;
    let rate = record.nightly_rate?;

    let mut out = format!(
        "Travelers are booking {} of available nights at an average rate of {} per night.",
        format_value(Metric::Occupancy, occupancy),
        format_value(Metric::NightlyRate, rate)
    );
    if let Some(rank) = record.occupancy_rank {
        out.push_str(&format!(
            " That occupancy ranks {} among tracked markets.",
            ordinal(rank)
        ));
    }
    if let Some(pct) = percent_above_average(occupancy, averages.occupancy) {
        if pct > 0 {
            out.push_str(&format!(
                " Occupancy runs {}% above the national average.",
                pct
            ));
        }
    }
    Some(out)
}

fn revenue_per_listing_section(
    record: &MarketRecord,
    averages: &AverageStatistics,
) -> Option<String> {
    let per_listing = record.revenue_per_listing?;

    let mut out = format!(
        "Each listing brings in an average of {} per year",
        format_value(Metric::RevenuePerListing, per_listing)
    );
    match record.revenue_per_listing_rank {
        Some(rank) => out.push_str(&format!(", good for {} nationally.", ordinal(rank))),
        None => out.push('.'),
    }
    if let Some(pct) = percent_above_average(per_listing, averages.revenue_per_listing) {
        if pct > 0 {
            out.push_str(&format!(
                " That is {}% above what the typical market earns per listing.",
                pct
            ));
        }
    }
    Some(out)
}

fn bigger_picture(name: &str, record: &MarketRecord, total_markets: usize) -> String {
    let mut out = format!(
        "<strong>The bigger picture:</strong> {} tracks {} short-term rental markets \
         nationwide, and {}'s trajectory this period puts it on the shortlist worth watching.",
        BRAND, total_markets, name
    );
    if let Some(listings) = record.total_listings {
        out.push_str(&format!(
            " With {} active listings, the market is large enough for the data to mean something.",
            format_value(Metric::TotalListings, listings)
        ));
    }
    out
}
