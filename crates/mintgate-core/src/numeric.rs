//! Numeric bounds validation for prices and amounts.
//!
//! Every quantity a mint ledger can hold is an unsigned integer in
//! `[0, 2^128)`. The ceiling bounds the magnitude any single mint-local
//! ledger entry can reach, preventing overflow or precision loss when
//! amounts cross serialization boundaries between independently operated
//! mints. `u128` carries that range exactly, so an overflowing parse *is*
//! the bound check.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PriceSide, ValidationError};

/// Anchored price grammar `pB/pQ`.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)/([0-9]+)$").expect("price regex"));

/// Anchored amount grammar: decimal digits only.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("amount regex"));

/// An offer exchange ratio.
///
/// Never reduced to lowest terms by this layer; `3/4` and `6/8` are
/// distinct values as far as validation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub base: u128,
    pub quote: u128,
}

/// Validate a price of the form `pB/pQ`.
///
/// Both sides must be base-10 unsigned integers in `[0, 2^128)`. A bound
/// failure names the side that overflowed.
pub fn validate_price(raw: &str) -> Result<Price, ValidationError> {
    let caps = PRICE_RE
        .captures(raw)
        .ok_or_else(|| ValidationError::PriceMalformed {
            raw: raw.to_string(),
        })?;

    let base = caps[1]
        .parse::<u128>()
        .map_err(|_| ValidationError::PriceOutOfBounds {
            side: PriceSide::Base,
            raw: caps[1].to_string(),
        })?;

    let quote = caps[2]
        .parse::<u128>()
        .map_err(|_| ValidationError::PriceOutOfBounds {
            side: PriceSide::Quote,
            raw: caps[2].to_string(),
        })?;

    Ok(Price { base, quote })
}

/// Validate the amount of an asset: decimal digits, value in `[0, 2^128)`.
pub fn validate_amount(raw: &str) -> Result<u128, ValidationError> {
    if !AMOUNT_RE.is_match(raw) {
        return Err(ValidationError::AmountInvalid {
            raw: raw.to_string(),
        });
    }

    raw.parse::<u128>()
        .map_err(|_| ValidationError::AmountInvalid {
            raw: raw.to_string(),
        })
}
