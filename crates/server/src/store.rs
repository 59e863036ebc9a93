// crates/server/src/store.rs
//! In-memory market statistics store.
//!
//! Records are loaded once from a JSON file at startup; averages are
//! computed eagerly since every news-article request needs them.

use std::path::{Path, PathBuf};

use presskit_core::{AverageStatistics, MarketRecord};
use thiserror::Error;

/// Errors loading the market data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read market data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse market data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// All tracked markets plus their precomputed cross-market averages.
#[derive(Debug, Clone)]
pub struct MarketStore {
    records: Vec<MarketRecord>,
    averages: AverageStatistics,
}

impl MarketStore {
    /// Load records from a JSON array file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<MarketRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(markets = records.len(), path = %path.display(), "Loaded market data");
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<MarketRecord>) -> Self {
        let averages = AverageStatistics::compute(&records);
        Self { records, averages }
    }

    /// Case-insensitive substring match against stored city names.
    /// First match in storage order wins.
    pub fn find_city(&self, query: &str) -> Option<&MarketRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.city.to_lowercase().contains(&needle))
    }

    pub fn records(&self) -> &[MarketRecord] {
        &self.records
    }

    pub fn averages(&self) -> &AverageStatistics {
        &self.averages
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
