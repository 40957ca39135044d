use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::dto::prediction::SubmitPredictionRequest;
use validator::Validate;

use super::services;
use crate::{dispatch::parse_payload, error::WebResult, state::AppState};

pub async fn submit_prediction(state: &AppState, payload: Value) -> WebResult<Response> {
    let request: SubmitPredictionRequest = parse_payload(payload)?;
    request.validate()?;

    services::submit_prediction(state, request).await?;

    Ok(Json("Prediction submitted successfully").into_response())
}

pub async fn get_predictions(state: &AppState) -> WebResult<Response> {
    let matches = services::list_predictions(state).await?;

    Ok(Json(matches).into_response())
}
