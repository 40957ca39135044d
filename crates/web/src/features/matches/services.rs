use storage::{
    dto::matches::{MatchResponse, SetMatchResultRequest},
    error::Result,
    models::Match,
    services::list_matches,
};

use crate::state::AppState;

pub async fn get_matches(state: &AppState) -> Result<Vec<MatchResponse>> {
    let matches = state.matches.get_all().await?;
    Ok(list_matches(matches))
}

/// Overwrites the recorded result of an existing match.
pub async fn set_match_result(state: &AppState, request: &SetMatchResultRequest) -> Result<Match> {
    let game = state
        .matches
        .update_result(&request.match_id, request.result())
        .await?;

    tracing::info!(
        match_id = %game.match_id,
        home_score = request.home_score,
        away_score = request.away_score,
        "Match result set"
    );

    Ok(game)
}
