//! Identity tokens and random passphrases.

use rand::RngCore;

/// Generate a prefixed identity token, e.g. `user_9f3ab2…` (32 hex chars).
pub fn new(prefix: &str) -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}_{}", prefix, hex::encode(bytes))
}

/// Generate a random passphrase seeding one key derivation.
///
/// 32 bytes from a CSPRNG; the entropy of every derived credential comes
/// entirely from this value (the salt is the non-secret user token).
pub fn rand_str() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_prefix_and_hex_body() {
        let token = new("user");
        let (prefix, body) = token.split_once('_').unwrap();
        assert_eq!(prefix, "user");
        assert_eq!(body.len(), 32);
        assert!(body.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(new("user"), new("user"));
    }

    #[test]
    fn test_rand_str_is_fresh_per_call() {
        assert_ne!(rand_str(), rand_str());
        assert_eq!(rand_str().len(), 64);
    }
}
