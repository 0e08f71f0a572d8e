//! SQLite implementation of the UserStore trait.
//!
//! This is the primary storage backend. It uses rusqlite with bundled
//! SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use mintgate_credentials::{token, CredentialIssuer};

use crate::classify::{SqliteClassifier, UniqueViolationClassifier};
use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::UserStore;
use crate::user::{User, UserStatus};

/// SQLite-based user store.
///
/// Thread-safe via internal Mutex. All statements run on spawn_blocking to
/// avoid blocking the async runtime; credential derivation happens before
/// the insert, on the issuer's own bounded blocking pool.
pub struct SqliteUserStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
    /// Issues credentials for newly created users.
    issuer: Arc<CredentialIssuer>,
    /// Classifies native uniqueness errors into the portable signal.
    classifier: SqliteClassifier,
}

impl SqliteUserStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>, issuer: Arc<CredentialIssuer>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            issuer,
            classifier: SqliteClassifier,
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory(issuer: Arc<CredentialIssuer>) -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            issuer,
            classifier: SqliteClassifier,
        })
    }
}

// Helper to convert a row to User. Column order must match SELECT_COLUMNS.
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let status_str: String = row.get("status")?;
    let status = UserStatus::parse(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(2, "status".into(), rusqlite::types::Type::Text)
    })?;

    Ok(User {
        token: row.get("token")?,
        created: row.get("created")?,
        status,
        username: row.get("username")?,
        email: row.get("email")?,
        secret: row.get("secret")?,
        password: row.get("password")?,
        mint_token: row.get("mint_token")?,
    })
}

const SELECT_COLUMNS: &str = "token, created, status, username, email, secret, password, mint_token";

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, username: &str, email: &str) -> Result<User> {
        // Derive credentials first: a derivation failure must not leave a
        // partial row behind, and the insert itself stays a single statement.
        let token = token::new("user");
        let credentials = self.issuer.issue(&token).await?;

        let user = User {
            token,
            created: now_millis(),
            status: UserStatus::Unverified,
            username: username.to_string(),
            email: email.to_string(),
            secret: credentials.secret,
            password: credentials.password,
            mint_token: None,
        };

        let conn = self.conn.clone();
        let classifier = self.classifier;
        let row = user.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;

            let inserted = conn.execute(
                "INSERT INTO users
                   (token, created, status, username, email, secret, password, mint_token)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    row.token,
                    row.created,
                    row.status.as_str(),
                    row.username,
                    row.email,
                    row.secret,
                    row.password,
                    row.mint_token,
                ],
            );

            match inserted {
                Ok(_) => Ok(row),
                Err(e) => {
                    if let Some(cause) = classifier.classify(&e) {
                        tracing::warn!("user creation conflict: {}", cause);
                        Err(StoreError::UniqueViolation { cause })
                    } else {
                        Err(StoreError::Database(e))
                    }
                }
            }
        })
        .await
        .map_err(|e| {
            StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("spawn_blocking failed: {}", e)),
            ))
        })?
    }

    async fn save(&self, user: &User) -> Result<()> {
        let conn = self.conn.clone();
        let user = user.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;

            // Only the mutable fields appear in SET; secret, username,
            // email and created are immutable post-creation.
            conn.execute(
                "UPDATE users
                 SET status = ?1, password = ?2, mint_token = ?3
                 WHERE token = ?4",
                params![
                    user.status.as_str(),
                    user.password,
                    user.mint_token,
                    user.token,
                ],
            )?;

            Ok(())
        })
        .await
        .map_err(|e| {
            StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("spawn_blocking failed: {}", e)),
            ))
        })?
    }

    async fn load_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.conn.clone();
        let username = username.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;

            conn.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM users WHERE username = ?1"),
                params![username],
                row_to_user,
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
        .map_err(|e| {
            StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("spawn_blocking failed: {}", e)),
            ))
        })?
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
