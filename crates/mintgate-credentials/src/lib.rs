//! # Mintgate Credentials
//!
//! Credential issuance for registered users.
//!
//! Every registration derives two independent credentials from a memory-hard
//! KDF: a long-lived 64-byte secret and a short-lived, rollable 16-byte
//! password. Each derivation is seeded with a freshly generated random
//! passphrase and salted with the user's own identity token; because the two
//! derivations are independent, rolling the password can never recover or
//! invalidate the secret.
//!
//! Derivation is deliberately expensive (scrypt, N=16384, r=8, p=1), so the
//! [`CredentialIssuer`] bounds concurrent derivations with a fixed-size
//! semaphore and runs the work on a blocking thread.
//!
//! ## Key Types
//!
//! - [`CredentialIssuer`] - Bounded, async issuance of credential pairs
//! - [`Credentials`] - One issued secret/password pair (base64url, no pad)
//! - [`token`] - Prefixed identity tokens and random passphrases

pub mod error;
pub mod issuer;
pub mod token;

pub use error::{CredentialError, Result};
pub use issuer::{
    CredentialIssuer, Credentials, DEFAULT_MAX_CONCURRENT, PASSWORD_BYTE_LEN, SECRET_BYTE_LEN,
};
