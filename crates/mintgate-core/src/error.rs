//! Error types for the Mintgate validation layer.

use std::fmt;

use thiserror::Error;

/// Which side of a price failed its bound check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSide {
    Base,
    Quote,
}

impl fmt::Display for PriceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSide::Base => write!(f, "base"),
            PriceSide::Quote => write!(f, "quote"),
        }
    }
}

/// User-facing input validation failures.
///
/// One family per validator. Every variant carries the offending raw input
/// and maps to a stable machine-readable code via [`ValidationError::code`].
/// These are 4xx-equivalent: safe to show to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "the offer price you provided is invalid: {raw}; prices must have \
         the form 'pB/pQ' where pB is the base asset price and pQ is the \
         quote asset price"
    )]
    PriceMalformed { raw: String },

    #[error(
        "the {side} asset price you provided is invalid: {raw}; asset \
         prices must be integers between 0 and 2^128"
    )]
    PriceOutOfBounds { side: PriceSide, raw: String },

    #[error(
        "the amount you provided is invalid: {raw}; amounts must be \
         integers between 0 and 2^128"
    )]
    AmountInvalid { raw: String },

    #[error("the asset pair you provided is invalid: {raw}")]
    PairInvalid { raw: String },

    #[error(
        "the offer id you provided in the path is invalid: {offer}; offer \
         ids must have the form kgodel@princetown.edu[offer_*]"
    )]
    PathInvalid { offer: String },

    #[error(
        "the id you provided is invalid: {raw}; ids must have the form \
         kgodel@princetown.edu[xxxx_*]"
    )]
    IdInvalid { raw: String },

    #[error("the secret you provided is structurally invalid: {raw}")]
    SecretInvalid { raw: String },

    #[error(
        "the transaction hop you provided is invalid: {raw}; transaction \
         hops must be 8 bit positive integers"
    )]
    HopInvalid { raw: String },
}

impl ValidationError {
    /// Stable machine-readable code for this failure.
    ///
    /// Codes are part of the wire contract with callers and never change.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::PriceMalformed { .. } | ValidationError::PriceOutOfBounds { .. } => {
                "price_invalid"
            }
            ValidationError::AmountInvalid { .. } => "amount_invalid",
            ValidationError::PairInvalid { .. } => "pair_invalid",
            ValidationError::PathInvalid { .. } => "path_invalid",
            ValidationError::IdInvalid { .. } => "id_invalid",
            ValidationError::SecretInvalid { .. } => "secret_invalid",
            ValidationError::HopInvalid { .. } => "hop_invalid",
        }
    }
}
