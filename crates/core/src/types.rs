// crates/core/src/types.rs
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six metrics tracked per market.
///
/// Declaration order doubles as the tie-break order when two metrics share
/// a rank: ranking collection iterates [`Metric::ALL`] and sorts stably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    GrossYield,
    TotalRevenue,
    TotalListings,
    RevenuePerListing,
    Occupancy,
    NightlyRate,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::GrossYield,
        Metric::TotalRevenue,
        Metric::TotalListings,
        Metric::RevenuePerListing,
        Metric::Occupancy,
        Metric::NightlyRate,
    ];

    /// Human-readable label used in generated copy.
    pub fn label(self) -> &'static str {
        match self {
            Metric::GrossYield => "Gross Yield",
            Metric::TotalRevenue => "Total Revenue",
            Metric::TotalListings => "Total Listings",
            Metric::RevenuePerListing => "Revenue per Listing",
            Metric::Occupancy => "Occupancy",
            Metric::NightlyRate => "Nightly Rate",
        }
    }
}

/// One market's statistics as curated by the admin.
///
/// Every metric value and rank is independently optional: a market may be
/// tracked before it has been ranked, and the generator never assumes one
/// side implies the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_yield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_yield_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_listings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_listings_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_per_listing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_per_listing_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate_rank: Option<u32>,
}

impl MarketRecord {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::GrossYield => self.gross_yield,
            Metric::TotalRevenue => self.total_revenue,
            Metric::TotalListings => self.total_listings,
            Metric::RevenuePerListing => self.revenue_per_listing,
            Metric::Occupancy => self.occupancy,
            Metric::NightlyRate => self.nightly_rate,
        }
    }

    pub fn rank(&self, metric: Metric) -> Option<u32> {
        match metric {
            Metric::GrossYield => self.gross_yield_rank,
            Metric::TotalRevenue => self.total_revenue_rank,
            Metric::TotalListings => self.total_listings_rank,
            Metric::RevenuePerListing => self.revenue_per_listing_rank,
            Metric::Occupancy => self.occupancy_rank,
            Metric::NightlyRate => self.nightly_rate_rank,
        }
    }

    /// "Austin, TX" when the state is known, otherwise just the city.
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}", self.city, state),
            None => self.city.clone(),
        }
    }
}

/// Cross-market arithmetic means, one per metric, computed over the records
/// where that metric is present. A metric nobody reports has no average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct AverageStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_yield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_listings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_per_listing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<f64>,
}

impl AverageStatistics {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::GrossYield => self.gross_yield,
            Metric::TotalRevenue => self.total_revenue,
            Metric::TotalListings => self.total_listings,
            Metric::RevenuePerListing => self.revenue_per_listing,
            Metric::Occupancy => self.occupancy,
            Metric::NightlyRate => self.nightly_rate,
        }
    }

    fn set(&mut self, metric: Metric, value: Option<f64>) {
        let slot = match metric {
            Metric::GrossYield => &mut self.gross_yield,
            Metric::TotalRevenue => &mut self.total_revenue,
            Metric::TotalListings => &mut self.total_listings,
            Metric::RevenuePerListing => &mut self.revenue_per_listing,
            Metric::Occupancy => &mut self.occupancy,
            Metric::NightlyRate => &mut self.nightly_rate,
        };
        *slot = value;
    }

    /// Compute per-metric means across all records. Records missing a metric
    /// simply don't count toward that metric's mean.
    pub fn compute(records: &[MarketRecord]) -> Self {
        let mut averages = AverageStatistics::default();
        for metric in Metric::ALL {
            let values: Vec<f64> = records.iter().filter_map(|r| r.value(metric)).collect();
            let mean = if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            };
            averages.set(metric, mean);
        }
        averages
    }
}
