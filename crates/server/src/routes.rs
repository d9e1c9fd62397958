//! API route handlers

use anomaly::{AnomalyDetector, DetectRequest, DetectResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::{ApiError, AppState};

/// `POST /detect`: judge `currentCost` against `historicalCosts`.
///
/// Any structural problem with the body is a 400 and never reaches the
/// detector. Too little history is a normal 200 with `isAnomaly: false`.
pub async fn detect(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(body) = payload?;
    let request = DetectRequest::from_json(body)?;

    let verdict = state
        .detector()
        .evaluate(&request.historical_costs, request.current_cost);

    if verdict.is_anomaly {
        tracing::info!(
            history_len = request.historical_costs.len(),
            current_cost = request.current_cost,
            "cost anomaly detected"
        );
    } else {
        tracing::debug!(
            history_len = request.historical_costs.len(),
            determined = verdict.is_determined(),
            "no anomaly"
        );
    }

    Ok(Json(verdict.into()))
}
