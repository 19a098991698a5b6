//! Daily history summary routes
//!
//! Callers own storage; they post their logged days and get back the weekly
//! averages and a trend input ready for `POST /api/v1/tdee`.

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tdee_engine::{summarize_week, trend_from_entries, DailyEntry, WeeklySummary, WeightTrendInput};

/// Create history routes
pub fn history_routes() -> Router<AppState> {
    Router::new().route("/summary", post(summarize))
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub entries: Vec<DailyEntry>,
    /// Defaults to the latest entry date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub week: WeeklySummary,
    /// Built from all entries, not just the week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_trend: Option<WeightTrendInput>,
}

/// POST /api/v1/history/summary - Weekly averages and derived weight trend
async fn summarize(ApiJson(req): ApiJson<SummaryRequest>) -> ApiResult<Json<SummaryResponse>> {
    let end_date = req
        .end_date
        .or_else(|| req.entries.iter().map(|e| e.date).max())
        .ok_or_else(|| ApiError::BadRequest("entries must not be empty".to_string()))?;

    let week = summarize_week(&req.entries, end_date)?
        .ok_or_else(|| ApiError::NotFound(format!("No entries in the week ending {}", end_date)))?;

    Ok(Json(SummaryResponse {
        week,
        weight_trend: trend_from_entries(&req.entries),
    }))
}
