//! Process-local stores. Insertion order is scan order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MatchRepository, PredictionRepository};
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchId, Prediction, ScoreLine};

#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<Vec<Match>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: Vec<Match>) -> Self {
        Self {
            matches: RwLock::new(matches),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn get_all(&self) -> Result<Vec<Match>> {
        Ok(self.matches.read().await.clone())
    }

    async fn get(&self, match_id: &MatchId) -> Result<Option<Match>> {
        let matches = self.matches.read().await;
        Ok(matches.iter().find(|game| &game.match_id == match_id).cloned())
    }

    async fn put(&self, game: &Match) -> Result<()> {
        let mut matches = self.matches.write().await;
        match matches.iter_mut().find(|stored| stored.match_id == game.match_id) {
            Some(stored) => *stored = game.clone(),
            None => matches.push(game.clone()),
        }
        Ok(())
    }

    async fn update_result(&self, match_id: &MatchId, result: ScoreLine) -> Result<Match> {
        let mut matches = self.matches.write().await;
        let game = matches
            .iter_mut()
            .find(|game| &game.match_id == match_id)
            .ok_or_else(StorageError::match_not_found)?;

        game.set_result(result);
        Ok(game.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPredictionRepository {
    predictions: RwLock<Vec<Prediction>>,
}

impl InMemoryPredictionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_predictions(predictions: Vec<Prediction>) -> Self {
        Self {
            predictions: RwLock::new(predictions),
        }
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    async fn get_all(&self) -> Result<Vec<Prediction>> {
        Ok(self.predictions.read().await.clone())
    }

    async fn get(&self, user_id: &str, match_id: &MatchId) -> Result<Option<Prediction>> {
        let predictions = self.predictions.read().await;
        Ok(predictions
            .iter()
            .find(|prediction| prediction.is_for(user_id, match_id))
            .cloned())
    }

    async fn put(&self, prediction: &Prediction) -> Result<()> {
        let mut predictions = self.predictions.write().await;
        match predictions
            .iter_mut()
            .find(|stored| stored.is_for(&prediction.user_id, &prediction.match_id))
        {
            Some(stored) => *stored = prediction.clone(),
            None => predictions.push(prediction.clone()),
        }
        Ok(())
    }
}
