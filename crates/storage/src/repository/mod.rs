//! Store interfaces for matches and predictions.
//!
//! Reads are full scans: whatever the store returns at call time, in store
//! order, without snapshot isolation across the two collections. Writes are
//! last-write-wins overwrites of a single entity.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Match, MatchId, Prediction, ScoreLine};

pub mod matches;
pub mod memory;
pub mod prediction;

pub use matches::PgMatchRepository;
pub use memory::{InMemoryMatchRepository, InMemoryPredictionRepository};
pub use prediction::PgPredictionRepository;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Every match, in store order.
    async fn get_all(&self) -> Result<Vec<Match>>;

    async fn get(&self, match_id: &MatchId) -> Result<Option<Match>>;

    /// Inserts the match or overwrites every field of an existing one.
    async fn put(&self, game: &Match) -> Result<()>;

    /// Overwrites both result fields of an existing match and returns it.
    /// Fails with `StorageError::NotFound` when the match does not exist.
    async fn update_result(&self, match_id: &MatchId, result: ScoreLine) -> Result<Match>;
}

#[async_trait]
pub trait PredictionRepository: Send + Sync {
    /// Every prediction, in store order.
    async fn get_all(&self) -> Result<Vec<Prediction>>;

    async fn get(&self, user_id: &str, match_id: &MatchId) -> Result<Option<Prediction>>;

    /// Inserts the prediction or overwrites the one with the same
    /// `(user_id, match_id)`.
    async fn put(&self, prediction: &Prediction) -> Result<()>;
}
