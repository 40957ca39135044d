use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use storage::models::{Match, MatchId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
    pub matches: Vec<FixtureMatch>,
}

/// Schedule of one match. Results are never part of seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureMatch {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    /// ISO 8601 without offset, e.g. `2024-06-14T21:00:00`
    pub match_date: NaiveDateTime,
}

impl FixtureMatch {
    pub fn to_match(&self) -> Match {
        Match::scheduled(
            self.match_id.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.match_date,
        )
    }
}
