//! The single action entry point. Every request is a JSON object whose
//! `action` field selects the operation; the remaining fields are its payload.

use axum::{
    body::Bytes,
    extract::State,
    response::Response,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{WebError, WebResult},
    features::{matches, predictions, scores},
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SubmitPrediction,
    GetScores,
    GetPredictions,
    GetMatches,
    SetMatchResult,
}

impl Action {
    /// Reads the `action` field. Absent, non-string and unknown values are all
    /// reported as [`WebError::InvalidAction`].
    pub fn from_payload(payload: &Value) -> WebResult<Self> {
        payload
            .get("action")
            .and_then(|action| Action::deserialize(action).ok())
            .ok_or(WebError::InvalidAction)
    }
}

/// Request envelope for the OpenAPI document only; bodies are parsed per
/// action by [`parse_payload`]. Which optional fields are required depends
/// on `action`.
#[derive(Debug, ToSchema)]
pub struct ActionRequest {
    pub action: Action,
    pub user_id: Option<String>,
    #[schema(value_type = Option<String>)]
    pub match_id: Option<Value>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api",
    request_body = ActionRequest,
    responses(
        (status = 200, description = "Action completed; the body depends on the action"),
        (status = 400, description = "Malformed body, invalid action or invalid fields", body = String),
        (status = 404, description = "Match not found", body = String),
        (status = 500, description = "Store failure", body = String)
    ),
    tag = "actions"
)]
pub async fn handle_action(State(state): State<AppState>, body: Bytes) -> WebResult<Response> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| WebError::BadRequest(format!("Malformed request body: {}", e)))?;

    let action = Action::from_payload(&payload)?;
    tracing::debug!(?action, "Dispatching action");

    match action {
        Action::SubmitPrediction => predictions::handlers::submit_prediction(&state, payload).await,
        Action::GetScores => scores::handlers::get_scores(&state).await,
        Action::GetPredictions => predictions::handlers::get_predictions(&state).await,
        Action::GetMatches => matches::handlers::get_matches(&state).await,
        Action::SetMatchResult => matches::handlers::set_match_result(&state, payload).await,
    }
}

/// Deserializes an action payload, turning missing or ill-typed fields into a 400.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: Value) -> WebResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| WebError::BadRequest(format!("Invalid request body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_names() {
        let cases = [
            ("submit_prediction", Action::SubmitPrediction),
            ("get_scores", Action::GetScores),
            ("get_predictions", Action::GetPredictions),
            ("get_matches", Action::GetMatches),
            ("set_match_result", Action::SetMatchResult),
        ];

        for (name, expected) in cases {
            let action = Action::from_payload(&json!({ "action": name })).unwrap();
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn test_invalid_actions() {
        for payload in [
            json!({}),
            json!({ "action": "drop_tables" }),
            json!({ "action": 3 }),
            json!({ "action": "GET_SCORES" }),
            json!(["get_scores"]),
        ] {
            assert!(matches!(
                Action::from_payload(&payload),
                Err(WebError::InvalidAction)
            ));
        }
    }
}
