//! Error types for doorkeep.

use thiserror::Error;

/// Common error type for doorkeep.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error.
    ///
    /// Generic database error wrapping anything the storage backend
    /// reports. Errors from sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// An account with the given email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Result type alias for doorkeep operations.
pub type Result<T> = std::result::Result<T, AppError>;
