use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{MatchId, ScoreLine};

/// One user's predicted score for one match. `(user_id, match_id)` identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Prediction {
    pub user_id: String,
    pub match_id: MatchId,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: NaiveDateTime,
}

impl Prediction {
    pub fn new(
        user_id: impl Into<String>,
        match_id: impl Into<MatchId>,
        score: ScoreLine,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            match_id: match_id.into(),
            home_score: score.home,
            away_score: score.away,
            created_at,
        }
    }

    pub fn score_line(&self) -> ScoreLine {
        ScoreLine::new(self.home_score, self.away_score)
    }

    pub fn is_for(&self, user_id: &str, match_id: &MatchId) -> bool {
        self.user_id == user_id && &self.match_id == match_id
    }
}
