use std::sync::Arc;

use storage::{Database, MatchRepository, PredictionRepository};

/// Store handles shared by every request, created once per process.
#[derive(Clone)]
pub struct AppState {
    pub matches: Arc<dyn MatchRepository>,
    pub predictions: Arc<dyn PredictionRepository>,
}

impl AppState {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        predictions: Arc<dyn PredictionRepository>,
    ) -> Self {
        Self {
            matches,
            predictions,
        }
    }

    pub fn from_database(db: &Database) -> Self {
        Self::new(
            Arc::new(db.match_repository()),
            Arc::new(db.prediction_repository()),
        )
    }
}
