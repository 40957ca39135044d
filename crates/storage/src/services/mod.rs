pub mod leaderboard;
pub mod listing;
pub mod scoring;

pub use leaderboard::compute_leaderboard;
pub use listing::{list_matches, list_matches_with_predictions};
pub use scoring::{points_for, score};
