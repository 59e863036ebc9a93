// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use crate::store::MarketStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// In-memory market statistics, loaded once at startup.
    pub store: MarketStore,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(store: MarketStore) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            store,
        })
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_starts_near_zero() {
        let state = AppState::new(MarketStore::from_records(vec![]));
        assert!(state.uptime_secs() < 2);
    }
}
