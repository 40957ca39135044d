use chrono::{SubsecRound, Utc};
use storage::{
    dto::{matches::MatchWithPredictions, prediction::SubmitPredictionRequest},
    error::{Result, StorageError},
    services::list_matches_with_predictions,
};

use crate::state::AppState;

/// Stores the prediction, replacing an earlier one by the same user for the
/// same match. The match has to exist.
pub async fn submit_prediction(state: &AppState, request: SubmitPredictionRequest) -> Result<()> {
    if state.matches.get(&request.match_id).await?.is_none() {
        return Err(StorageError::match_not_found());
    }

    // stored and rendered at whole-second precision
    let submitted_at = Utc::now().naive_utc().trunc_subsecs(0);
    let prediction = request.into_prediction(submitted_at);
    state.predictions.put(&prediction).await?;

    tracing::info!(
        user_id = %prediction.user_id,
        match_id = %prediction.match_id,
        "Prediction submitted"
    );

    Ok(())
}

/// Every match in schedule order with its predictions and their points
pub async fn list_predictions(state: &AppState) -> Result<Vec<MatchWithPredictions>> {
    let predictions = state.predictions.get_all().await?;
    let matches = state.matches.get_all().await?;

    Ok(list_matches_with_predictions(matches, predictions))
}
