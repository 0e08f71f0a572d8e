//! Identifier normalization: parsing global resource names.
//!
//! A Mintgate identifier addresses a resource (user, offer, transaction) at
//! a specific mint and has the grammar `owner@mint[kind_token]`, for example
//! `alice@example.org[offer_7f3a]`. The mint host may itself contain `@` or
//! `.` characters; only the outer bracket pair and the first `_` inside it
//! are structurally significant.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Anchored identifier grammar.
///
/// The kind tag is alphabetic, so the first `_` inside the brackets is
/// always the kind/token separator; tokens may contain further underscores.
/// Anchoring both ends keeps matching linear on attacker-controlled input.
static ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\[\]@]+@[^\[\]]+)\[([a-z]+)_([^\[\]]+)\]$").expect("identifier regex")
});

/// A parsed identifier.
///
/// Ephemeral: constructed per validation call and never persisted by this
/// layer. The `owner` is the full `user@mint` address; `kind` is the
/// alphabetic resource tag; `token` is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub owner: String,
    pub kind: String,
    pub token: String,
}

impl Identifier {
    /// Parse an identifier from its string form.
    ///
    /// Fails with [`ValidationError::IdInvalid`] when the brackets are
    /// absent, malformed or empty, or when owner or token is empty.
    pub fn parse(id: &str) -> Result<Identifier, ValidationError> {
        let caps = ID_RE.captures(id).ok_or_else(|| ValidationError::IdInvalid {
            raw: id.to_string(),
        })?;

        Ok(Identifier {
            owner: caps[1].to_string(),
            kind: caps[2].to_string(),
            token: caps[3].to_string(),
        })
    }
}

/// Extract the normalized (owner, token) pair from an identifier string.
///
/// This is the form every identifier-shaped check reuses: most callers need
/// only the owning address and the opaque token.
pub fn normalized_owner_and_token(id: &str) -> Result<(String, String), ValidationError> {
    let parsed = Identifier::parse(id)?;
    Ok((parsed.owner, parsed.token))
}
