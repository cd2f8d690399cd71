//! Error types for the tenant directory

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DirectoryError::Unavailable(err.to_string())
            }
            _ => DirectoryError::Database(err.to_string()),
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
