//! The persisted user entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verification state of a registered user.
///
/// The only transition is `Unverified -> Verified` (triggered externally,
/// persisted via [`UserStore::save`](crate::UserStore::save)); there is no
/// way back and no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Unverified,
    Verified,
}

impl UserStatus {
    /// The storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Unverified => "unverified",
            UserStatus::Verified => "verified",
        }
    }

    /// Parse the storage representation.
    pub fn parse(s: &str) -> Option<UserStatus> {
        match s {
            "unverified" => Some(UserStatus::Unverified),
            "verified" => Some(UserStatus::Verified),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user.
///
/// Created once at registration with status `Unverified`. `secret` and
/// `password` are independently derived, base64url-encoded credential
/// strings. Post-creation, only `status`, `password` and `mint_token` are
/// mutable; users are never deleted by this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Primary identity token, e.g. `user_9f3ab2…`.
    pub token: String,
    /// Creation time (Unix ms). Immutable.
    pub created: i64,

    pub status: UserStatus,
    /// Immutable post-creation; unique across the store.
    pub username: String,
    /// Immutable post-creation; unique across the store.
    pub email: String,

    /// Long-lived credential (64 derived bytes, base64url). Immutable.
    pub secret: String,
    /// Short-lived credential (16 derived bytes, base64url). Rollable.
    pub password: String,

    /// Set once the user claims a mint identity.
    pub mint_token: Option<String>,
}

impl User {
    /// Public API representation of this user, credentials stripped.
    pub fn resource(&self) -> UserResource {
        UserResource {
            id: self.token.clone(),
            created: self.created,
            status: self.status,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// The user as exposed over the API: no secret, no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResource {
    pub id: String,
    pub created: i64,
    pub status: UserStatus,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            token: "user_00ff".to_string(),
            created: 1736870400000,
            status: UserStatus::Unverified,
            username: "alice".to_string(),
            email: "alice@example.org".to_string(),
            secret: "s".repeat(86),
            password: "p".repeat(22),
            mint_token: None,
        }
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [UserStatus::Unverified, UserStatus::Verified] {
            assert_eq!(UserStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(UserStatus::parse("deleted"), None);
    }

    #[test]
    fn test_resource_strips_credentials() {
        let user = sample_user();
        let resource = user.resource();

        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"status\":\"unverified\""));
        assert!(!json.contains(&user.secret));
        assert!(!json.contains(&user.password));
    }
}
