use storage::{dto::leaderboard::LeaderboardEntry, error::Result, services::compute_leaderboard};

use crate::state::AppState;

pub async fn get_scores(state: &AppState) -> Result<Vec<LeaderboardEntry>> {
    let predictions = state.predictions.get_all().await?;
    let matches = state.matches.get_all().await?;

    Ok(compute_leaderboard(&predictions, &matches))
}
