use async_trait::async_trait;
use sqlx::PgPool;

use super::MatchRepository;
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchId, ScoreLine};

/// PostgreSQL-backed match store
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn get_all(&self) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(
            r#"
            SELECT match_id, home_team, away_team, match_date, home_score, away_score
            FROM matches
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    async fn get(&self, match_id: &MatchId) -> Result<Option<Match>> {
        let game = sqlx::query_as::<_, Match>(
            r#"
            SELECT match_id, home_team, away_team, match_date, home_score, away_score
            FROM matches
            WHERE match_id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(game)
    }

    async fn put(&self, game: &Match) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO matches (match_id, home_team, away_team, match_date, home_score, away_score)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (match_id) DO UPDATE
            SET
                home_team = EXCLUDED.home_team,
                away_team = EXCLUDED.away_team,
                match_date = EXCLUDED.match_date,
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score
            "#,
        )
        .bind(&game.match_id)
        .bind(&game.home_team)
        .bind(&game.away_team)
        .bind(game.match_date)
        .bind(game.home_score)
        .bind(game.away_score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_result(&self, match_id: &MatchId, result: ScoreLine) -> Result<Match> {
        let game = sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET
                home_score = $2,
                away_score = $3
            WHERE match_id = $1
            RETURNING match_id, home_team, away_team, match_date, home_score, away_score
            "#,
        )
        .bind(match_id)
        .bind(result.home)
        .bind(result.away)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(StorageError::match_not_found)?;

        Ok(game)
    }
}
