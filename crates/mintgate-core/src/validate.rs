//! Structural validators: hops, secrets, offer paths, asset pairs and ids.
//!
//! These sit directly at the request boundary. Each takes an untyped string
//! (or sequence of strings) and either returns the typed value or a
//! [`ValidationError`] naming the offending input. All are pure and fail
//! fast on the first violation.

use std::fmt;

use crate::error::ValidationError;
use crate::identifier::{normalized_owner_and_token, Identifier};

/// Validate a transaction hop: a base-10 signed 8-bit integer, non-negative.
///
/// The 8-bit parse itself rejects magnitudes above 127, so the accepted
/// range is exactly `[0, 127]`.
pub fn validate_hop(raw: &str) -> Result<i8, ValidationError> {
    match raw.parse::<i8>() {
        Ok(hop) if hop >= 0 => Ok(hop),
        _ => Err(ValidationError::HopInvalid {
            raw: raw.to_string(),
        }),
    }
}

/// Validate the structural shape of a secret: exactly 16 bytes.
///
/// No charset restriction; semantic strength is established by the
/// credential issuer, not re-derived here.
pub fn validate_secret(raw: &str) -> Result<&str, ValidationError> {
    if raw.len() != 16 {
        return Err(ValidationError::SecretInvalid {
            raw: raw.to_string(),
        });
    }
    Ok(raw)
}

/// Validate a path of offer identifiers.
///
/// Every element must independently satisfy the identifier grammar. The
/// first failure wins and names the offending element. On success the path
/// is returned unchanged: order is significant (it encodes hop sequence)
/// and duplicates are permitted; uniqueness is an execution-engine concern.
pub fn validate_path(path: &[String]) -> Result<Vec<String>, ValidationError> {
    for offer in path {
        if Identifier::parse(offer).is_err() {
            return Err(ValidationError::PathInvalid {
                offer: offer.clone(),
            });
        }
    }
    Ok(path.to_vec())
}

/// Validate the ID of an object, returning `(id, owner, token)`.
///
/// Thin wrapper over identifier normalization for endpoints that need the
/// original string alongside the parsed parts.
pub fn validate_id(id: &str) -> Result<(String, String, String), ValidationError> {
    let (owner, token) =
        normalized_owner_and_token(id).map_err(|_| ValidationError::IdInvalid {
            raw: id.to_string(),
        })?;
    Ok((id.to_string(), owner, token))
}

/// Resolved description of one side of an asset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Canonical asset name, e.g. `alice@mint.example[asset_USD.2]`.
    pub name: String,
    /// The issuing owner address.
    pub owner: String,
    /// Asset code.
    pub code: String,
    /// Decimal scale.
    pub scale: i8,
}

/// The external collaborator that splits and resolves asset pairs.
///
/// Pair resolution requires mint-level knowledge this crate does not have;
/// validation's contract ends at wrapping any resolver failure into the
/// portable `pair_invalid` signal.
pub trait AssetResolver {
    type Error: fmt::Display;

    /// Resolve a pair string into its two asset descriptors.
    fn resolve_pair(&self, pair: &str) -> Result<Vec<AssetDescriptor>, Self::Error>;
}

/// Validate an asset pair by delegating to the resolver.
pub fn validate_asset_pair<R: AssetResolver>(
    resolver: &R,
    pair: &str,
) -> Result<Vec<AssetDescriptor>, ValidationError> {
    resolver
        .resolve_pair(pair)
        .map_err(|_| ValidationError::PairInvalid {
            raw: pair.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal resolver: splits on '/' and requires both sides to be
    /// identifier-shaped.
    struct SplitResolver;

    impl AssetResolver for SplitResolver {
        type Error = ValidationError;

        fn resolve_pair(&self, pair: &str) -> Result<Vec<AssetDescriptor>, ValidationError> {
            pair.split('/')
                .map(|part| {
                    let id = Identifier::parse(part)?;
                    Ok(AssetDescriptor {
                        name: part.to_string(),
                        owner: id.owner,
                        code: id.token.clone(),
                        scale: 0,
                    })
                })
                .collect()
        }
    }

    #[test]
    fn test_hop_accepts_full_range() {
        assert_eq!(validate_hop("0").unwrap(), 0);
        assert_eq!(validate_hop("127").unwrap(), 127);
    }

    #[test]
    fn test_hop_rejects_out_of_range() {
        for bad in ["-1", "128", "-128", "256", "abc", "", "1.5"] {
            let err = validate_hop(bad).unwrap_err();
            assert_eq!(err.code(), "hop_invalid", "input: {bad:?}");
        }
    }

    #[test]
    fn test_secret_requires_exactly_16_bytes() {
        assert!(validate_secret("0123456789abcdef").is_ok());
        assert!(validate_secret("0123456789abcde").is_err());
        assert!(validate_secret("0123456789abcdefg").is_err());
        // Any byte content is fine at exactly 16.
        assert!(validate_secret("!!  ??\t\n[]{}()<>").is_ok());
    }

    #[test]
    fn test_path_accepts_ordered_wellformed_path() {
        let path = vec![
            "alice@mint-a.test[offer_1]".to_string(),
            "bob@mint-b.test[offer_2]".to_string(),
            "alice@mint-a.test[offer_1]".to_string(), // duplicates permitted
        ];
        let validated = validate_path(&path).unwrap();
        assert_eq!(validated, path);
    }

    #[test]
    fn test_path_names_first_offending_element() {
        let path = vec![
            "alice@mint-a.test[offer_1]".to_string(),
            "bob@mint-b.test[offer_2]".to_string(),
            "bad".to_string(),
        ];
        let err = validate_path(&path).unwrap_err();
        assert_eq!(err.code(), "path_invalid");
        assert!(matches!(err, ValidationError::PathInvalid { offer } if offer == "bad"));
    }

    #[test]
    fn test_empty_path_is_valid() {
        assert_eq!(validate_path(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_validate_id_returns_all_three_parts() {
        let (id, owner, token) = validate_id("carol@mint.test[transaction_t9]").unwrap();
        assert_eq!(id, "carol@mint.test[transaction_t9]");
        assert_eq!(owner, "carol@mint.test");
        assert_eq!(token, "t9");
    }

    #[test]
    fn test_validate_id_rejects_garbage() {
        let err = validate_id("not an id").unwrap_err();
        assert_eq!(err.code(), "id_invalid");
    }

    #[test]
    fn test_asset_pair_delegates_and_wraps() {
        let pair = "alice@m.test[asset_USD]/bob@m.test[asset_EUR]";
        let descriptors = validate_asset_pair(&SplitResolver, pair).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].owner, "alice@m.test");
        assert_eq!(descriptors[1].code, "EUR");

        let err = validate_asset_pair(&SplitResolver, "garbage").unwrap_err();
        assert_eq!(err.code(), "pair_invalid");
    }
}
