//! # Mintgate Testkit
//!
//! Testing utilities for Mintgate.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known validator inputs with expected outcomes,
//!   shared by every consumer that needs to agree on the boundary grammar
//! - **Generators**: Proptest strategies for identifiers, prices, amounts,
//!   hops and secrets
//! - **Fixtures**: Helper structs wiring an issuer, a store and a registrar
//!   for test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use mintgate_testkit::vectors::{all_vectors, check_vector};
//!
//! for vector in all_vectors() {
//!     check_vector(&vector).unwrap();
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mintgate_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn any_generated_id_validates(id in generators::identifier("offer")) {
//!         mintgate_core::validate_id(&id).unwrap();
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use mintgate_testkit::fixtures::TestFixture;
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! let registration = fixture.registrar().register("alice", "a@x.com").await.unwrap();
//! # }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use vectors::{all_vectors, check_vector, verify_all_vectors, ValidatorVector, VectorKind};
