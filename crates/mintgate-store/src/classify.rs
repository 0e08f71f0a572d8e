//! Classification of backend uniqueness errors into a portable signal.
//!
//! Every database engine reports a violated unique constraint with its own
//! error shape. The store depends only on this adapter interface; one small
//! classifier per supported backend turns the native error into the
//! portable [`StoreError::UniqueViolation`](crate::StoreError) cause.

/// Classifies a backend-native error as a unique-constraint violation.
pub trait UniqueViolationClassifier {
    /// The backend's native error type.
    type BackendError;

    /// Returns the underlying cause when `err` is a unique-constraint
    /// violation, `None` for every other failure.
    fn classify(&self, err: &Self::BackendError) -> Option<String>;
}

/// Classifier for SQLite via rusqlite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteClassifier;

impl UniqueViolationClassifier for SqliteClassifier {
    type BackendError = rusqlite::Error;

    fn classify(&self, err: &rusqlite::Error) -> Option<String> {
        match err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Some(msg.clone().unwrap_or_else(|| e.to_string()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_classifies_unique_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT UNIQUE); INSERT INTO t VALUES ('x');")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t VALUES ('x')", [])
            .unwrap_err();

        let cause = SqliteClassifier.classify(&err).expect("unique violation");
        assert!(cause.contains("UNIQUE"), "cause: {cause}");
    }

    #[test]
    fn test_other_errors_are_not_classified() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing VALUES (1)", []).unwrap_err();
        assert!(SqliteClassifier.classify(&err).is_none());

        // Other constraint kinds are not unique violations either.
        conn.execute_batch("CREATE TABLE n (v TEXT NOT NULL)").unwrap();
        let err = conn
            .execute("INSERT INTO n VALUES (NULL)", [])
            .unwrap_err();
        assert!(SqliteClassifier.classify(&err).is_none());
    }
}
