use std::collections::HashMap;

use crate::dto::matches::{MatchResponse, MatchWithPredictions};
use crate::dto::prediction::PredictionWithPoints;
use crate::models::{Match, MatchId, Prediction};

use super::scoring::score;

/// All matches in ascending schedule order, dates formatted for display.
pub fn list_matches(mut matches: Vec<Match>) -> Vec<MatchResponse> {
    matches.sort_by_key(|game| game.match_date);
    matches.into_iter().map(MatchResponse::from).collect()
}

/// All matches in ascending schedule order, each carrying its predictions
/// annotated with points. Matches without a result annotate every prediction
/// with 0. Predictions keep their scan order within a match.
pub fn list_matches_with_predictions(
    mut matches: Vec<Match>,
    predictions: Vec<Prediction>,
) -> Vec<MatchWithPredictions> {
    let mut by_match: HashMap<MatchId, Vec<Prediction>> = HashMap::new();
    for prediction in predictions {
        by_match
            .entry(prediction.match_id.clone())
            .or_default()
            .push(prediction);
    }

    matches.sort_by_key(|game| game.match_date);

    matches
        .into_iter()
        .map(|game| {
            let predictions = by_match
                .remove(&game.match_id)
                .unwrap_or_default()
                .into_iter()
                .map(|prediction| {
                    let points = score(&prediction, &game);
                    PredictionWithPoints::new(prediction, points)
                })
                .collect();

            MatchWithPredictions {
                details: MatchResponse::from(game),
                predictions,
            }
        })
        .collect()
}
