// crates/server/src/routes/markets.rs
//! Market listing endpoints feeding the public dashboard.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use presskit_core::{AverageStatistics, MarketRecord};
use serde::Serialize;
use ts_rs::TS;

use crate::state::AppState;

/// Response for the market listing endpoint.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct MarketListResponse {
    pub markets: Vec<MarketRecord>,
    pub averages: AverageStatistics,
    pub total: usize,
}

/// GET /api/markets - All tracked markets plus cross-market averages.
pub async fn list_markets(State(state): State<Arc<AppState>>) -> Json<MarketListResponse> {
    Json(MarketListResponse {
        markets: state.store.records().to_vec(),
        averages: *state.store.averages(),
        total: state.store.len(),
    })
}

/// Create the markets routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/markets", get(list_markets))
}
