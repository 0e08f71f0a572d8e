//! # Mintgate Core
//!
//! Pure validation primitives for the Mintgate trust boundary.
//!
//! Every externally supplied value that will eventually drive a settlement
//! between independently operated mints passes through this crate first:
//! identifiers, prices, amounts, offer paths, hop indices and secrets all
//! arrive as untyped strings at a network boundary and leave as typed,
//! bounds-checked values or as a [`ValidationError`].
//!
//! This crate contains no I/O, no storage, no networking. Every validator is
//! a pure function, safe for unbounded concurrent invocation.
//!
//! ## Key Types
//!
//! - [`Identifier`] - Parsed global resource name `owner@mint[kind_token]`
//! - [`Price`] - Exchange ratio with both sides bounded to `[0, 2^128)`
//! - [`ValidationError`] - User-facing failures with stable machine codes
//!
//! ## Failure policy
//!
//! Validators fail fast on the first violation, carry the offending raw
//! input in the message, and expose a stable code via
//! [`ValidationError::code`]. They never retry and have no side effects.

pub mod error;
pub mod identifier;
pub mod numeric;
pub mod validate;

pub use error::{PriceSide, ValidationError};
pub use identifier::{normalized_owner_and_token, Identifier};
pub use numeric::{validate_amount, validate_price, Price};
pub use validate::{
    validate_asset_pair, validate_hop, validate_id, validate_path, validate_secret,
    AssetDescriptor, AssetResolver,
};
