// crates/core/src/format.rs
//! Numeric formatting shared by every section builder.
//!
//! One table maps each metric to its display kind and decimal count so no
//! section builder carries its own formatting rules.

use crate::types::Metric;

/// How a metric's value renders in generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `7.50%`
    Percentage,
    /// `$50,000,000`
    Currency,
    /// `12,400`
    Count,
}

/// Display rule for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFormat {
    pub kind: FormatKind,
    pub decimals: usize,
}

impl Metric {
    /// The single source of truth for per-metric display rules.
    pub fn display_format(self) -> MetricFormat {
        match self {
            Metric::GrossYield => MetricFormat { kind: FormatKind::Percentage, decimals: 2 },
            Metric::Occupancy => MetricFormat { kind: FormatKind::Percentage, decimals: 1 },
            Metric::TotalRevenue => MetricFormat { kind: FormatKind::Currency, decimals: 0 },
            Metric::RevenuePerListing => MetricFormat { kind: FormatKind::Currency, decimals: 0 },
            Metric::NightlyRate => MetricFormat { kind: FormatKind::Currency, decimals: 2 },
            Metric::TotalListings => MetricFormat { kind: FormatKind::Count, decimals: 0 },
        }
    }
}

/// Format a metric's value per the display table.
pub fn format_value(metric: Metric, value: f64) -> String {
    let MetricFormat { kind, decimals } = metric.display_format();
    match kind {
        FormatKind::Percentage => format!("{:.*}%", decimals, value),
        FormatKind::Currency => format!("${}", group_thousands(value, decimals)),
        FormatKind::Count => group_thousands(value, decimals),
    }
}

/// Render `value` with `decimals` fraction digits and comma-grouped
/// integer digits, e.g. `50000000.0` → `"50,000,000"`.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// English ordinal suffix for a rank: 1→"st", 2→"nd", 3→"rd", 4→"th",
/// with the 11/12/13 exception (always "th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    const SUFFIXES: [&str; 4] = ["th", "st", "nd", "rd"];
    let v = n % 100;
    // Past 20 the last digit decides; 0..=19 index directly so 11/12/13
    // fall off the table and land on "th".
    let idx = if v >= 20 { v % 10 } else { v };
    SUFFIXES.get(idx as usize).copied().unwrap_or(SUFFIXES[0])
}

/// `8` → `"8th"`, `21` → `"21st"`.
pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// How far `value` sits above `average`, as a rounded whole percentage.
///
/// `None` when the average is absent or zero; the caller skips the
/// comparison clause entirely rather than emitting NaN or infinity.
pub fn percent_above_average(value: f64, average: Option<f64>) -> Option<i64> {
    let average = average?;
    if average == 0.0 {
        return None;
    }
    Some(((value - average) / average * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ordinal_suffix_standard_rule() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(10), "10th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(42), "42nd");
        assert_eq!(ordinal(63), "63rd");
        assert_eq!(ordinal(100), "100th");
        assert_eq!(ordinal(101), "101st");
    }

    #[test]
    fn test_ordinal_teens_exception() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(113), "113th");
    }

    #[test]
    fn test_ordinal_exhaustive_1_to_120() {
        for n in 1..=120u32 {
            let last_two = n % 100;
            let expected = if (11..=13).contains(&last_two) {
                "th"
            } else {
                match n % 10 {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                }
            };
            assert_eq!(ordinal_suffix(n), expected, "rank {}", n);
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(1000.0, 0), "1,000");
        assert_eq!(group_thousands(50_000_000.0, 0), "50,000,000");
        assert_eq!(group_thousands(1234.5, 2), "1,234.50");
        assert_eq!(group_thousands(-1234567.0, 0), "-1,234,567");
    }

    #[test]
    fn test_format_value_per_metric_table() {
        assert_eq!(format_value(Metric::GrossYield, 7.5), "7.50%");
        assert_eq!(format_value(Metric::Occupancy, 61.25), "61.2%");
        assert_eq!(format_value(Metric::TotalRevenue, 50_000_000.0), "$50,000,000");
        assert_eq!(format_value(Metric::RevenuePerListing, 48_500.4), "$48,500");
        assert_eq!(format_value(Metric::NightlyRate, 245.0), "$245.00");
        assert_eq!(format_value(Metric::TotalListings, 12_400.0), "12,400");
    }

    #[test]
    fn test_percent_above_average() {
        assert_eq!(percent_above_average(50_000_000.0, Some(40_000_000.0)), Some(25));
        assert_eq!(percent_above_average(7.5, Some(6.0)), Some(25));
        assert_eq!(percent_above_average(30.0, Some(40.0)), Some(-25));
    }

    #[test]
    fn test_percent_above_average_guards_zero_and_absent() {
        assert_eq!(percent_above_average(50.0, Some(0.0)), None);
        assert_eq!(percent_above_average(50.0, None), None);
    }
}
