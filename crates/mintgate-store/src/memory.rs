//! In-memory implementation of the UserStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite -
//! including uniqueness-violation classification - but keeps everything in
//! memory with no persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use mintgate_credentials::{token, CredentialIssuer};

use crate::error::{Result, StoreError};
use crate::traits::UserStore;
use crate::user::{User, UserStatus};

/// In-memory user store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryUserStore {
    issuer: Arc<CredentialIssuer>,
    inner: RwLock<MemoryInner>,
}

struct MemoryInner {
    /// Users indexed by identity token.
    by_token: HashMap<String, User>,

    /// Unique index: username -> token.
    by_username: HashMap<String, String>,

    /// Unique index: email -> token.
    by_email: HashMap<String, String>,
}

impl MemoryUserStore {
    /// Create a new empty in-memory store.
    pub fn new(issuer: Arc<CredentialIssuer>) -> Self {
        Self {
            issuer,
            inner: RwLock::new(MemoryInner {
                by_token: HashMap::new(),
                by_username: HashMap::new(),
                by_email: HashMap::new(),
            }),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, username: &str, email: &str) -> Result<User> {
        let token = token::new("user");
        let credentials = self.issuer.issue(&token).await?;

        let user = User {
            token: token.clone(),
            created: now_millis(),
            status: UserStatus::Unverified,
            username: username.to_string(),
            email: email.to_string(),
            secret: credentials.secret,
            password: credentials.password,
            mint_token: None,
        };

        let mut inner = self.inner.write().unwrap();

        // Same causes SQLite would report, so callers see one shape.
        if inner.by_username.contains_key(username) {
            return Err(StoreError::UniqueViolation {
                cause: "UNIQUE constraint failed: users.username".to_string(),
            });
        }
        if inner.by_email.contains_key(email) {
            return Err(StoreError::UniqueViolation {
                cause: "UNIQUE constraint failed: users.email".to_string(),
            });
        }

        inner
            .by_username
            .insert(username.to_string(), token.clone());
        inner.by_email.insert(email.to_string(), token.clone());
        inner.by_token.insert(token, user.clone());

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut inner = self.inner.write().unwrap();

        // Updating a missing row is a no-op, as in SQL.
        if let Some(stored) = inner.by_token.get_mut(&user.token) {
            stored.status = user.status;
            stored.password = user.password.clone();
            stored.mint_token = user.mint_token.clone();
        }

        Ok(())
    }

    async fn load_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.read().unwrap();

        Ok(inner
            .by_username
            .get(username)
            .and_then(|token| inner.by_token.get(token))
            .cloned())
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
