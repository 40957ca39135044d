use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ScoreLine;

/// Identifier of a match.
///
/// Clients send it either as a JSON string or as a JSON integer; both forms are
/// normalized to the decimal string so that `"7"` and `7` address the same match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, sqlx::Type, ToSchema)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for MatchId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMatchId {
            Text(String),
            Number(i64),
        }

        match RawMatchId::deserialize(deserializer) {
            Ok(RawMatchId::Text(id)) => Ok(Self(id)),
            Ok(RawMatchId::Number(id)) => Ok(Self(id.to_string())),
            Err(_) => Err(serde::de::Error::custom(
                "match_id must be a string or an integer",
            )),
        }
    }
}

/// A scheduled match. The result fields stay empty until an administrator records them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i32>,
}

impl Match {
    /// Creates a match without a recorded result.
    pub fn scheduled(
        match_id: impl Into<MatchId>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        match_date: NaiveDateTime,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            match_date,
            home_score: None,
            away_score: None,
        }
    }

    /// The recorded result, present only once both halves are set.
    pub fn result(&self) -> Option<ScoreLine> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some(ScoreLine::new(home, away)),
            _ => None,
        }
    }

    pub fn set_result(&mut self, result: ScoreLine) {
        self.home_score = Some(result.home);
        self.away_score = Some(result.away);
    }
}
