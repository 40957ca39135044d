pub mod leaderboard;
pub mod matches;
pub mod prediction;

use crate::models::MatchId;

fn validate_match_id(match_id: &MatchId) -> Result<(), validator::ValidationError> {
    if match_id.as_str().trim().is_empty() {
        let mut error = validator::ValidationError::new("empty_match_id");
        error.message = Some("match_id must not be empty".into());
        return Err(error);
    }
    Ok(())
}
