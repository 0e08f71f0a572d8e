//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use mintgate_credentials::CredentialIssuer;
use mintgate_register::{Registrar, RegistrarConfig};
use mintgate_store::MemoryUserStore;

/// A test fixture with a shared issuer and an in-memory user store.
pub struct TestFixture {
    pub issuer: Arc<CredentialIssuer>,
    pub store: Arc<MemoryUserStore>,
}

impl TestFixture {
    /// Create a new fixture with default issuer bounds.
    pub fn new() -> Self {
        let issuer = Arc::new(CredentialIssuer::default());
        let store = Arc::new(MemoryUserStore::new(issuer.clone()));
        Self { issuer, store }
    }

    /// The registrar configuration used across tests.
    pub fn config() -> RegistrarConfig {
        RegistrarConfig {
            environment: "qa".to_string(),
            from_address: "register@mint.test".to_string(),
            mint_host: "mint.test".to_string(),
            credentials_url: "https://mint.test/credentials".to_string(),
        }
    }

    /// Build a registrar over this fixture's store and issuer.
    pub fn registrar(&self) -> Registrar<MemoryUserStore> {
        Registrar::new(self.store.clone(), self.issuer.clone(), Self::config())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintgate_store::{UserStatus, UserStore};

    #[tokio::test(flavor = "multi_thread")]
    async fn test_fixture_supports_full_flow() {
        let fixture = TestFixture::new();
        let registrar = fixture.registrar();

        let registration = registrar.register("alice", "a@x.com").await.unwrap();
        assert_eq!(registration.user.status, UserStatus::Unverified);

        // The fixture's store is the registrar's store.
        let loaded = fixture
            .store
            .load_by_username("alice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded, registration.user);
    }
}
