//! Error types for the registration flow.

use thiserror::Error;

use mintgate_credentials::CredentialError;
use mintgate_store::StoreError;

/// Errors that can occur during registration operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The username fails the shape check.
    #[error(
        "the username you provided is invalid: {0}; usernames are 1 to 256 \
         lowercase alphanumeric characters"
    )]
    UsernameInvalid(String),

    /// The email address fails the shape check.
    #[error("the email you provided is invalid: {0}")]
    EmailInvalid(String),

    /// The username or email is already registered.
    ///
    /// User-facing conflict, distinct from a generic failure.
    #[error("this username or email address is already registered: {cause}")]
    Taken { cause: String },

    /// The user has already completed verification; the transition is
    /// one-way.
    #[error("user {0} is already verified")]
    AlreadyVerified(String),

    /// Credential derivation failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Any other persistence failure; not shown to end users beyond a
    /// generic indication.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl RegisterError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            RegisterError::UsernameInvalid(_) => "username_invalid",
            RegisterError::EmailInvalid(_) => "email_invalid",
            RegisterError::Taken { .. } => "already_registered",
            RegisterError::AlreadyVerified(_) => "already_verified",
            RegisterError::Credential(_) | RegisterError::Store(_) => "internal_error",
        }
    }
}

/// Result type for registration operations.
pub type Result<T> = std::result::Result<T, RegisterError>;
