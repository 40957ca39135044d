pub mod football_match;
pub mod prediction;
pub mod score_line;

pub use football_match::{Match, MatchId};
pub use prediction::Prediction;
pub use score_line::{Outcome, ScoreLine};
