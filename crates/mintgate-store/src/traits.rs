//! UserStore trait: the abstract interface for user record persistence.
//!
//! This trait allows the registration flow to be storage-agnostic.
//! Implementations include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;
use crate::user::User;

/// The UserStore trait: async interface for user record persistence.
///
/// # Design Notes
///
/// - **Uniqueness by constraint**: `create_user` performs a single insert
///   and relies on the backend's unique constraints for username/email;
///   violations surface as the portable
///   [`StoreError::UniqueViolation`](crate::StoreError). Implementations
///   must not pre-check-then-insert (racy under concurrency).
/// - **Partial updates**: `save` writes only the mutable fields (status,
///   password, mint_token); secret, username, email and created are
///   immutable post-creation.
/// - **Absence is not failure**: `load_by_username` returns `Ok(None)` when
///   no row matches.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create and persist a new user.
    ///
    /// Builds the user with a fresh identity token, status `Unverified`,
    /// and credentials from the issuer, then performs a single insert.
    async fn create_user(&self, username: &str, email: &str) -> Result<User>;

    /// Update the mutable fields of a user by primary token.
    async fn save(&self, user: &User) -> Result<()>;

    /// Load a user by username, `None` when no row matches.
    async fn load_by_username(&self, username: &str) -> Result<Option<User>>;
}
