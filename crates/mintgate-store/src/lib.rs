//! # Mintgate Store
//!
//! User record persistence for Mintgate. Provides a trait-based interface
//! for the user store with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store owns the [`User`] entity: it creates users at registration
//! (with credentials from the issuer), persists the one-way
//! `Unverified -> Verified` status transition, password rolls and
//! mint-token association, and loads users by username.
//!
//! Uniqueness of usernames and emails is delegated entirely to the
//! backend's unique constraints: concurrent conflicting inserts race at the
//! database and exactly one wins. Backend-specific violation signals are
//! classified into the portable [`StoreError::UniqueViolation`] by a small
//! per-backend [`UniqueViolationClassifier`] adapter; this crate never
//! pre-checks-then-inserts.
//!
//! ## Key Types
//!
//! - [`UserStore`] - The async trait for all user record operations
//! - [`SqliteUserStore`] - SQLite-based persistent storage
//! - [`MemoryUserStore`] - In-memory storage for tests
//! - [`User`] / [`UserStatus`] - The persisted entity and its state machine

pub mod classify;
pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;
pub mod user;

pub use classify::{SqliteClassifier, UniqueViolationClassifier};
pub use error::{Result, StoreError};
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;
pub use traits::UserStore;
pub use user::{User, UserResource, UserStatus};
