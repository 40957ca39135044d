use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The named entity does not exist in the store.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn match_not_found() -> Self {
        Self::NotFound("Match")
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Maps a failed prediction write, turning a dangling `match_id` into a
    /// constraint violation instead of an opaque database error.
    pub(crate) fn from_prediction_write(error: sqlx::Error) -> Self {
        let error = StorageError::from(error);
        if error.is_foreign_key_violation() {
            return StorageError::ConstraintViolation(
                "Prediction references an unknown match".to_string(),
            );
        }
        error
    }
}
