//! API route handlers for the presskit server.

pub mod health;
pub mod markets;
pub mod reports;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - GET  /api/markets - All tracked markets plus cross-market averages
/// - POST /api/reports/press-release - Generate a press release for a city
/// - POST /api/reports/news-article - Generate one news-article variant
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", markets::router())
        .nest("/api", reports::router())
        .with_state(state)
}
