//! Error types for credential issuance.

use thiserror::Error;

/// Errors that can occur while issuing credentials.
///
/// Any derivation failure is fatal to the issuing call; no partial
/// credentials are ever surfaced.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The key-derivation primitive failed.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// The issuer's admission semaphore was closed (shutdown in progress).
    #[error("credential issuer is closed")]
    Closed,
}

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;
