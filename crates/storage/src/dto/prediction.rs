use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{MatchId, Prediction, ScoreLine};

/// Payload of the `submit_prediction` action
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPredictionRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "user_id must be between 1 and 100 characters"
    ))]
    pub user_id: String,

    #[validate(custom(function = "super::validate_match_id"))]
    pub match_id: MatchId,

    #[validate(range(min = 0, message = "home_score must not be negative"))]
    pub home_score: i32,

    #[validate(range(min = 0, message = "away_score must not be negative"))]
    pub away_score: i32,
}

impl SubmitPredictionRequest {
    pub fn score_line(&self) -> ScoreLine {
        ScoreLine::new(self.home_score, self.away_score)
    }

    pub fn into_prediction(self, created_at: NaiveDateTime) -> Prediction {
        let score = self.score_line();
        Prediction::new(self.user_id, self.match_id, score, created_at)
    }
}

/// A listed prediction annotated with the points it earned so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictionWithPoints {
    pub user_id: String,
    pub match_id: MatchId,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: NaiveDateTime,
    pub points: u32,
}

impl PredictionWithPoints {
    pub fn new(prediction: Prediction, points: u32) -> Self {
        Self {
            user_id: prediction.user_id,
            match_id: prediction.match_id,
            home_score: prediction.home_score,
            away_score: prediction.away_score,
            created_at: prediction.created_at,
            points,
        }
    }
}
