pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use error::Result;

pub use repository::{MatchRepository, PredictionRepository};

/// Shared PostgreSQL connection pool for the match and prediction stores
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        tracing::debug!("Connection pool created");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn match_repository(&self) -> repository::PgMatchRepository {
        repository::PgMatchRepository::new(self.pool.clone())
    }

    pub fn prediction_repository(&self) -> repository::PgPredictionRepository {
        repository::PgPredictionRepository::new(self.pool.clone())
    }
}
