use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::services;
use crate::{error::WebResult, state::AppState};

pub async fn get_scores(state: &AppState) -> WebResult<Response> {
    let scores = services::get_scores(state).await?;

    Ok(Json(scores).into_response())
}
