pub mod matches;
pub mod predictions;
pub mod scores;
