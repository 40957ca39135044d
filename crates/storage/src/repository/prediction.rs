use async_trait::async_trait;
use sqlx::PgPool;

use super::PredictionRepository;
use crate::error::{Result, StorageError};
use crate::models::{MatchId, Prediction};

/// PostgreSQL-backed prediction store
#[derive(Clone)]
pub struct PgPredictionRepository {
    pool: PgPool,
}

impl PgPredictionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PredictionRepository for PgPredictionRepository {
    async fn get_all(&self) -> Result<Vec<Prediction>> {
        let predictions = sqlx::query_as::<_, Prediction>(
            r#"
            SELECT user_id, match_id, home_score, away_score, created_at
            FROM predictions
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(predictions)
    }

    async fn get(&self, user_id: &str, match_id: &MatchId) -> Result<Option<Prediction>> {
        let prediction = sqlx::query_as::<_, Prediction>(
            r#"
            SELECT user_id, match_id, home_score, away_score, created_at
            FROM predictions
            WHERE user_id = $1 AND match_id = $2
            "#,
        )
        .bind(user_id)
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(prediction)
    }

    async fn put(&self, prediction: &Prediction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO predictions (user_id, match_id, home_score, away_score, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, match_id) DO UPDATE
            SET
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&prediction.user_id)
        .bind(&prediction.match_id)
        .bind(prediction.home_score)
        .bind(prediction.away_score)
        .bind(prediction.created_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::from_prediction_write)?;

        Ok(())
    }
}
