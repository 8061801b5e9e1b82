//! Plan gateway endpoints and the CRM scoring endpoint.
//!
//! The add-plan and invest handlers relay the engine's output verbatim as
//! the response body. JSON extraction failures (syntax errors, missing
//! fields) are mapped to 400 before any engine dispatch.

use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use investra_core::errors::{Error, ValidationError};
use investra_core::plans::{AddPlanRequest, InvestRequest};

fn bad_payload(rejection: JsonRejection) -> Error {
    Error::Validation(ValidationError::InvalidInput(rejection.body_text()))
}

async fn add_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddPlanRequest>, JsonRejection>,
) -> ApiResult<String> {
    let Json(request) = payload.map_err(bad_payload)?;
    let output = state.plan_service.add_plan(request).await?;
    Ok(output)
}

async fn invest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InvestRequest>, JsonRejection>,
) -> ApiResult<String> {
    let Json(request) = payload.map_err(bad_payload)?;
    let output = state.plan_service.invest(request).await?;
    Ok(output)
}

#[derive(serde::Deserialize)]
struct ScoreRequest {
    features: Vec<f64>,
}

#[derive(serde::Serialize)]
struct ScoreResponse {
    score: f64,
}

async fn score(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<ScoreResponse>> {
    let Json(request) = payload.map_err(bad_payload)?;
    let score = state.scorer.score(&request.features)?;
    Ok(Json(ScoreResponse { score }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add-plan", post(add_plan))
        .route("/invest", post(invest))
        .route("/score", post(score))
}
