//! TDEE calculation API routes

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tdee_engine::{calorie_target, calorie_targets, CalorieTarget, Goal, TdeeInput, TdeeResult};
use tracing::info;

/// Create TDEE routes
pub fn tdee_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(compute_tdee))
        .route("/targets", post(goal_targets))
}

/// Request for the goal target table
#[derive(Debug, Deserialize)]
pub struct TargetsRequest {
    pub tdee: f64,
    /// Goal name; hyphenated forms and short aliases are accepted
    #[serde(default)]
    pub goal: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TargetsResponse {
    pub tdee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<CalorieTarget>,
    pub targets: Vec<CalorieTarget>,
}

/// POST /api/v1/tdee - Run the full TDEE pipeline
async fn compute_tdee(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TdeeInput>,
) -> ApiResult<Json<TdeeResult>> {
    let result = state.calculator().compute(&input)?;

    info!(
        tdee = result.authoritative_tdee,
        source = ?result.tdee_source,
        goal = ?result.goal,
        "TDEE computed"
    );

    Ok(Json(result))
}

/// POST /api/v1/tdee/targets - Calorie targets for a known TDEE
async fn goal_targets(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TargetsRequest>,
) -> ApiResult<Json<TargetsResponse>> {
    if !req.tdee.is_finite() || req.tdee <= 0.0 {
        return Err(ApiError::BadRequest(format!(
            "tdee must be a positive number (got {})",
            req.tdee
        )));
    }

    let engine = &state.config().engine;
    let kcal_per_lb = engine.trend.kcal_per_lb;

    let selected = req
        .goal
        .as_deref()
        .map(|s| s.parse::<Goal>().map_err(ApiError::BadRequest))
        .transpose()?
        .map(|goal| calorie_target(req.tdee, goal, &engine.targets, kcal_per_lb));

    Ok(Json(TargetsResponse {
        tdee: req.tdee,
        selected,
        targets: calorie_targets(req.tdee, &engine.targets, kcal_per_lb),
    }))
}
