//! The credential issuer: bounded, deliberately expensive key derivation.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use scrypt::Params;
use tokio::sync::Semaphore;

use crate::error::{CredentialError, Result};
use crate::token;

/// Length in bytes of the derived long-lived secret.
pub const SECRET_BYTE_LEN: usize = 64;

/// Length in bytes of the derived short-lived password.
pub const PASSWORD_BYTE_LEN: usize = 16;

/// Default bound on concurrent derivations.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

// Cost parameters: N = 2^14 = 16384, r = 8, p = 1. These are part of the
// compatibility contract with existing stored credentials; do not change
// them without a coordinated migration.
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// One issued secret/password pair, base64url-encoded without padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Long-lived credential material (64 derived bytes).
    pub secret: String,
    /// Short-lived, rollable credential (16 derived bytes).
    pub password: String,
}

/// Issues credentials for user tokens.
///
/// Each derivation is CPU-bound and intentionally slow, so the issuer
/// admits at most `max_concurrent` derivation calls at a time and runs the
/// scrypt work on `spawn_blocking`. Derivation calls are independent and
/// have no ordering requirement relative to each other.
pub struct CredentialIssuer {
    limiter: Arc<Semaphore>,
}

impl CredentialIssuer {
    /// Create an issuer admitting at most `max_concurrent` derivation calls.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            limiter: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Issue a fresh secret and password for the given user token.
    ///
    /// The two derivations are independent: each is seeded with its own
    /// freshly generated random passphrase. Two calls with the same token
    /// therefore never produce equal credentials.
    pub async fn issue(&self, user_token: &str) -> Result<Credentials> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| CredentialError::Closed)?;

        let user_token = user_token.to_string();
        tokio::task::spawn_blocking(move || {
            let secret = derive(&user_token, SECRET_BYTE_LEN)?;
            let password = derive(&user_token, PASSWORD_BYTE_LEN)?;
            Ok(Credentials { secret, password })
        })
        .await
        .map_err(|e| CredentialError::Derivation(format!("derivation task failed: {}", e)))?
    }

    /// Derive a new password for the given user token.
    ///
    /// Repeats only the password derivation with a new random passphrase;
    /// the secret is untouched.
    pub async fn roll_password(&self, user_token: &str) -> Result<String> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| CredentialError::Closed)?;

        let user_token = user_token.to_string();
        tokio::task::spawn_blocking(move || derive(&user_token, PASSWORD_BYTE_LEN))
            .await
            .map_err(|e| CredentialError::Derivation(format!("derivation task failed: {}", e)))?
    }

    /// Stop admitting new derivations. In-flight calls complete.
    pub fn close(&self) {
        self.limiter.close();
    }
}

impl Default for CredentialIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT)
    }
}

/// One scrypt derivation: fresh random passphrase, user token as salt,
/// `len` output bytes, base64url-encoded without padding.
fn derive(user_token: &str, len: usize) -> Result<String> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, len)
        .map_err(|e| CredentialError::Derivation(e.to_string()))?;

    let passphrase = token::rand_str();
    let mut out = vec![0u8; len];
    scrypt::scrypt(
        passphrase.as_bytes(),
        user_token.as_bytes(),
        &params,
        &mut out,
    )
    .map_err(|e| CredentialError::Derivation(e.to_string()))?;

    Ok(URL_SAFE_NO_PAD.encode(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64 without padding: ceil(n * 4 / 3) characters.
    const SECRET_ENCODED_LEN: usize = 86; // 64 bytes
    const PASSWORD_ENCODED_LEN: usize = 22; // 16 bytes

    #[tokio::test(flavor = "multi_thread")]
    async fn test_issue_produces_encoded_lengths() {
        let issuer = CredentialIssuer::default();
        let creds = issuer.issue("user_0123").await.unwrap();

        assert_eq!(creds.secret.len(), SECRET_ENCODED_LEN);
        assert_eq!(creds.password.len(), PASSWORD_ENCODED_LEN);
        // base64url alphabet only, no padding.
        for c in creds.secret.chars().chain(creds.password.chars()) {
            assert!(c.is_ascii_alphanumeric() || c == '-' || c == '_');
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_same_token_never_yields_equal_credentials() {
        let issuer = CredentialIssuer::default();
        let a = issuer.issue("user_same").await.unwrap();
        let b = issuer.issue("user_same").await.unwrap();

        // Entropy comes from the fresh passphrase, not the salt.
        assert_ne!(a.secret, b.secret);
        assert_ne!(a.password, b.password);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_roll_password_is_fresh() {
        let issuer = CredentialIssuer::default();
        let creds = issuer.issue("user_roll").await.unwrap();
        let rolled = issuer.roll_password("user_roll").await.unwrap();

        assert_eq!(rolled.len(), PASSWORD_ENCODED_LEN);
        assert_ne!(rolled, creds.password);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_closed_issuer_rejects() {
        let issuer = CredentialIssuer::new(1);
        issuer.close();

        let err = issuer.issue("user_late").await.unwrap_err();
        assert!(matches!(err, CredentialError::Closed));
    }
}
