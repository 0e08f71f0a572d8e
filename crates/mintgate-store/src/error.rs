//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The requested username or email is already registered.
    ///
    /// This is the portable form of every backend's native
    /// unique-constraint violation; callers use it to produce a conflict
    /// response distinct from a generic failure.
    #[error("unique constraint violation: {cause}")]
    UniqueViolation { cause: String },

    /// Credential issuance failed while creating a user.
    #[error("credential issuance failed: {0}")]
    Credential(#[from] mintgate_credentials::CredentialError),

    /// Invalid data in storage.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
