// crates/server/src/routes/reports.rs
//! Report generation endpoints: press releases and news-article variants.
//!
//! Both handlers do the same dance: validate the city field, resolve the
//! record with a case-insensitive substring match (first match wins), then
//! hand everything to the pure generators in presskit-core.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use presskit_core::{generate_news_article, generate_press_release, MarketRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for both report endpoints. `variant` only applies to
/// news articles and defaults to 0.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub variant: Option<i64>,
}

/// Response for the press release endpoint.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct PressReleaseResponse {
    pub press_release: String,
}

/// Response for the news article endpoint. `variant` echoes the effective
/// (mod 3) selector so A/B callers know which structure they got.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../web/src/types/generated/")]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct NewsArticleResponse {
    pub article: String,
    pub variant: i64,
}

/// Validate the city field and resolve it against the store.
fn resolve_city<'a>(state: &'a AppState, request: &ReportRequest) -> ApiResult<&'a MarketRecord> {
    let city = request
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required field: city".to_string()))?;

    state
        .store
        .find_city(city)
        .ok_or_else(|| ApiError::CityNotFound(city.to_string()))
}

/// POST /api/reports/press-release - Generate a press release for a city.
pub async fn press_release(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<Json<PressReleaseResponse>> {
    let record = resolve_city(&state, &request)?;
    tracing::info!(city = %record.city, "Generating press release");

    Ok(Json(PressReleaseResponse {
        press_release: generate_press_release(record),
    }))
}

/// POST /api/reports/news-article - Generate one news-article variant.
pub async fn news_article(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<Json<NewsArticleResponse>> {
    let record = resolve_city(&state, &request)?;
    let variant = request.variant.unwrap_or(0);
    let effective = variant.rem_euclid(3);
    tracing::info!(city = %record.city, variant = effective, "Generating news article");

    Ok(Json(NewsArticleResponse {
        article: generate_news_article(record, state.store.averages(), state.store.len(), variant),
        variant: effective,
    }))
}

/// Create the reports routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports/press-release", post(press_release))
        .route("/reports/news-article", post(news_article))
}
