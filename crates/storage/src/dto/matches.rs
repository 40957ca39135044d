use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::prediction::PredictionWithPoints;
use crate::models::{Match, MatchId, ScoreLine};

/// Display format of match dates in every listing.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn format_match_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Payload of the `set_match_result` action
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetMatchResultRequest {
    #[validate(custom(function = "super::validate_match_id"))]
    pub match_id: MatchId,

    #[validate(range(min = 0, message = "home_score must not be negative"))]
    pub home_score: i32,

    #[validate(range(min = 0, message = "away_score must not be negative"))]
    pub away_score: i32,
}

impl SetMatchResultRequest {
    pub fn result(&self) -> ScoreLine {
        ScoreLine::new(self.home_score, self.away_score)
    }
}

/// A match as shown to clients, with its date rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    /// `DD.MM.YYYY HH:MM`
    pub match_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i32>,
}

impl From<Match> for MatchResponse {
    fn from(game: Match) -> Self {
        Self {
            match_date: format_match_date(&game.match_date),
            match_id: game.match_id,
            home_team: game.home_team,
            away_team: game.away_team,
            home_score: game.home_score,
            away_score: game.away_score,
        }
    }
}

/// A match together with every prediction submitted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchWithPredictions {
    #[serde(flatten)]
    pub details: MatchResponse,
    pub predictions: Vec<PredictionWithPoints>,
}
