use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::dto::matches::SetMatchResultRequest;
use validator::Validate;

use super::services;
use crate::{dispatch::parse_payload, error::WebResult, state::AppState};

pub async fn get_matches(state: &AppState) -> WebResult<Response> {
    let matches = services::get_matches(state).await?;

    Ok(Json(matches).into_response())
}

pub async fn set_match_result(state: &AppState, payload: Value) -> WebResult<Response> {
    let request: SetMatchResultRequest = parse_payload(payload)?;
    request.validate()?;

    services::set_match_result(state, &request).await?;

    Ok(Json("Match result set successfully").into_response())
}
