//! # Mintgate Register
//!
//! The unified registration API for a Mintgate node: the trust-boundary
//! flow that turns a raw `(username, email)` pair into a persisted user
//! with independently derived credentials and a rendered delivery message.
//!
//! ## Overview
//!
//! - **Validation**: usernames and emails are shape-checked before any
//!   expensive work; everything else arriving at the boundary goes through
//!   `mintgate-core`'s validators.
//! - **Issuance**: credentials come from the bounded
//!   [`CredentialIssuer`](mintgate_credentials::CredentialIssuer); the
//!   secret and password are derived independently so a password roll can
//!   never touch the secret.
//! - **Persistence**: the user record lands in a
//!   [`UserStore`](mintgate_store::UserStore); username/email conflicts
//!   surface as [`RegisterError::Taken`], distinct from internal failures.
//! - **Delivery artifact**: each issuance renders one credentials email
//!   from an immutable [`EmailTemplate`]; actual delivery is an external
//!   collaborator's job.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mintgate_credentials::CredentialIssuer;
//! use mintgate_register::{Registrar, RegistrarConfig};
//! use mintgate_store::SqliteUserStore;
//!
//! async fn example() {
//!     let issuer = Arc::new(CredentialIssuer::default());
//!     let store = SqliteUserStore::open("register.db", issuer.clone()).unwrap();
//!
//!     let registrar = Registrar::new(
//!         Arc::new(store),
//!         issuer,
//!         RegistrarConfig {
//!             environment: "prod".into(),
//!             from_address: "register@mint.example".into(),
//!             mint_host: "mint.example".into(),
//!             credentials_url: "https://mint.example/credentials".into(),
//!         },
//!     );
//!
//!     let registration = registrar.register("alice", "alice@example.org").await.unwrap();
//!     // Hand registration.message to the mail-delivery collaborator.
//!     let _ = registration.message;
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `mintgate_register::core` - Validators and validation errors
//! - `mintgate_register::credentials` - Credential issuance
//! - `mintgate_register::store` - User record persistence

pub use mintgate_core as core;
pub use mintgate_credentials as credentials;
pub use mintgate_store as store;

pub mod email;
pub mod error;
pub mod registrar;

pub use email::EmailTemplate;
pub use error::{RegisterError, Result};
pub use registrar::{Registrar, RegistrarConfig, Registration};
