//! The Registrar: registration, verification and password rolling.
//!
//! The Registrar composes the credential issuer and the user store behind
//! the operations a registration endpoint needs. It owns the email
//! template and the boundary shape checks; everything heavier is delegated.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use mintgate_credentials::CredentialIssuer;
use mintgate_store::{StoreError, User, UserStatus, UserStore};

use crate::email::EmailTemplate;
use crate::error::{RegisterError, Result};

/// Anchored username grammar: 1 to 256 lowercase alphanumerics.
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{1,256}$").expect("username regex"));

/// Minimal email shape: one `@`, non-empty sides, a dotted domain, no
/// whitespace. Full address validation belongs to the delivery layer.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// Configuration for the Registrar.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Deployment environment tag carried in the credentials link.
    pub environment: String,
    /// Sender address for credential emails.
    pub from_address: String,
    /// Host of the mint this registrar fronts.
    pub mint_host: String,
    /// Fixed URL the credentials link is built on.
    pub credentials_url: String,
}

/// A completed registration: the persisted user and the rendered
/// credentials message for the delivery collaborator.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub message: String,
}

/// The main Registrar struct.
pub struct Registrar<S: UserStore> {
    /// The user record store.
    store: Arc<S>,
    /// Issues and rolls credentials.
    issuer: Arc<CredentialIssuer>,
    /// Immutable template, built once here and passed by reference.
    template: EmailTemplate,
}

impl<S: UserStore> Registrar<S> {
    /// Create a new registrar instance.
    pub fn new(store: Arc<S>, issuer: Arc<CredentialIssuer>, config: RegistrarConfig) -> Self {
        let template = EmailTemplate::new(
            config.environment,
            config.from_address,
            config.mint_host,
            config.credentials_url,
        );
        Self {
            store,
            issuer,
            template,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the email template.
    pub fn template(&self) -> &EmailTemplate {
        &self.template
    }

    /// Register a new user.
    ///
    /// Shape-checks the username and email, creates the user (fresh token,
    /// status `Unverified`, derived credentials) and renders the
    /// credentials message. A username or email collision surfaces as
    /// [`RegisterError::Taken`]; the store's unique constraint is the sole
    /// arbiter, so concurrent conflicting registrations race there and
    /// exactly one wins.
    pub async fn register(&self, username: &str, email: &str) -> Result<Registration> {
        if !USERNAME_RE.is_match(username) {
            return Err(RegisterError::UsernameInvalid(username.to_string()));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(RegisterError::EmailInvalid(email.to_string()));
        }

        let user = match self.store.create_user(username, email).await {
            Ok(user) => user,
            Err(StoreError::UniqueViolation { cause }) => {
                return Err(RegisterError::Taken { cause });
            }
            Err(e) => return Err(RegisterError::Store(e)),
        };

        tracing::debug!("registered user {} ({})", user.username, user.token);

        let message = self
            .template
            .render(&user.username, &user.email, &user.secret);

        Ok(Registration { user, message })
    }

    /// Mark a user verified and associate the claimed mint identity.
    ///
    /// The verification trigger itself is external; this is the one-way
    /// `Unverified -> Verified` mechanism.
    pub async fn verify(&self, user: &mut User, mint_token: &str) -> Result<()> {
        if user.status == UserStatus::Verified {
            return Err(RegisterError::AlreadyVerified(user.username.clone()));
        }

        user.status = UserStatus::Verified;
        user.mint_token = Some(mint_token.to_string());
        self.store.save(user).await?;

        Ok(())
    }

    /// Roll the user's password.
    ///
    /// Re-derives only the password from a fresh passphrase; secret,
    /// username, email and token are untouched.
    pub async fn roll_password(&self, user: &mut User) -> Result<()> {
        user.password = self.issuer.roll_password(&user.token).await?;
        self.store.save(user).await?;

        Ok(())
    }
}
