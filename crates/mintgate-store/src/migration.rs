//! Database schema migrations for SQLite.
//!
//! We use a simple versioned migration system. Each migration is a SQL
//! string that transforms the schema from version N to N+1.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema.
///
/// This function is idempotent - it can be called multiple times safely.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current < CURRENT_VERSION {
        let tx = conn.transaction()?;

        for version in (current + 1)..=CURRENT_VERSION {
            apply_migration(&tx, version)?;

            tx.execute(
                "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
                rusqlite::params![version, now_millis()],
            )?;
        }

        tx.commit()?;
    }

    Ok(())
}

/// Apply a specific migration version.
fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(StoreError::Migration(format!(
            "unknown migration version: {}",
            version
        ))),
    }
}

/// Migration v1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Registered users. Uniqueness of username and email is enforced
        -- here and nowhere else: concurrent conflicting inserts race at
        -- this constraint and exactly one wins.
        CREATE TABLE users (
            token TEXT PRIMARY KEY,          -- identity token, user_<hex>
            created INTEGER NOT NULL,        -- creation time (Unix ms)
            status TEXT NOT NULL,            -- 'unverified' | 'verified'
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            secret TEXT NOT NULL,            -- base64url, 64 derived bytes
            password TEXT NOT NULL,          -- base64url, 16 derived bytes
            mint_token TEXT                  -- set when a mint identity is claimed
        );
        "#,
    )?;

    Ok(())
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_creates_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate(&mut conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"schema_migrations".to_string()));
    }

    #[test]
    fn test_migration_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate(&mut conn).unwrap();
        migrate(&mut conn).unwrap();
        migrate(&mut conn).unwrap();

        let version: u32 = conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn test_username_unique_constraint_present() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate(&mut conn).unwrap();

        conn.execute(
            "INSERT INTO users (token, created, status, username, email, secret, password)
             VALUES ('t1', 0, 'unverified', 'alice', 'a@x.com', 's', 'p')",
            [],
        )
        .unwrap();

        let err = conn
            .execute(
                "INSERT INTO users (token, created, status, username, email, secret, password)
                 VALUES ('t2', 0, 'unverified', 'alice', 'b@y.com', 's', 'p')",
                [],
            )
            .unwrap_err();
        assert!(err.to_string().contains("UNIQUE"));
    }
}
