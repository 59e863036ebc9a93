// crates/core/src/rankings.rs
//! Ranking collection and partitioning shared by both report types.

use crate::types::{MarketRecord, Metric};

/// Rank at or under which a metric counts as a "strong" national showing.
pub const STRONG_RANK_CUTOFF: u32 = 25;

/// Rank at or under which a metric still counts as a moderate showing.
pub const MODERATE_RANK_CUTOFF: u32 = 50;

/// One ranked metric on a record. Built only when both the value and the
/// rank are present; rank 1 is the best market nationally.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub metric: Metric,
    pub label: &'static str,
    pub rank: u32,
    pub value: f64,
}

/// Collect every fully-present (value and rank) metric on the record,
/// sorted ascending by rank so the best showing comes first.
///
/// The sort is stable: metrics sharing a rank keep the [`Metric::ALL`]
/// declaration order, so repeated calls produce identical output.
pub fn collect_rankings(record: &MarketRecord) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let rank = record.rank(metric)?;
            let value = record.value(metric)?;
            Some(RankingEntry {
                metric,
                label: metric.label(),
                rank,
                value,
            })
        })
        .collect();
    entries.sort_by_key(|e| e.rank);
    entries
}

/// Entries at or under the strong cutoff, in rank order.
pub fn strong_entries(rankings: &[RankingEntry]) -> Vec<&RankingEntry> {
    rankings.iter().filter(|e| e.rank <= STRONG_RANK_CUTOFF).collect()
}

/// Entries past the strong cutoff, in rank order.
pub fn other_entries(rankings: &[RankingEntry]) -> Vec<&RankingEntry> {
    rankings.iter().filter(|e| e.rank > STRONG_RANK_CUTOFF).collect()
}
