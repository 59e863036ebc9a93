// crates/server/src/lib.rs
//! Presskit server library.
//!
//! This crate provides the Axum-based HTTP server for the PressKit Markets
//! application. It serves a JSON API for browsing market statistics and
//! generating press releases and news articles on demand.

pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;
pub use store::{MarketStore, StoreError};

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, markets, reports)
/// - CORS for development (allows any origin)
/// - Request tracing
pub fn create_app(store: MarketStore) -> Router {
    let state = AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
