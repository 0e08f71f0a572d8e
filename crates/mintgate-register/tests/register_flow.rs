//! End-to-end registration flow tests against both store backends.

use std::sync::Arc;

use mintgate_credentials::CredentialIssuer;
use mintgate_register::{RegisterError, Registrar, RegistrarConfig};
use mintgate_store::{MemoryUserStore, SqliteUserStore, UserStatus, UserStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn config() -> RegistrarConfig {
    RegistrarConfig {
        environment: "qa".to_string(),
        from_address: "register@mint.test".to_string(),
        mint_host: "mint.test".to_string(),
        credentials_url: "https://mint.test/credentials".to_string(),
    }
}

fn memory_registrar() -> Registrar<MemoryUserStore> {
    init_tracing();
    let issuer = Arc::new(CredentialIssuer::default());
    let store = Arc::new(MemoryUserStore::new(issuer.clone()));
    Registrar::new(store, issuer, config())
}

fn sqlite_registrar() -> Registrar<SqliteUserStore> {
    init_tracing();
    let issuer = Arc::new(CredentialIssuer::default());
    let store = Arc::new(SqliteUserStore::open_memory(issuer.clone()).unwrap());
    Registrar::new(store, issuer, config())
}

#[tokio::test(flavor = "multi_thread")]
async fn register_persists_unverified_user_with_credentials() {
    let registrar = sqlite_registrar();

    let registration = registrar.register("alice", "a@x.com").await.unwrap();
    assert_eq!(registration.user.status, UserStatus::Unverified);
    assert_eq!(registration.user.secret.len(), 86); // 64 bytes, base64url no pad
    assert_eq!(registration.user.password.len(), 22); // 16 bytes

    let loaded = registrar
        .store()
        .load_by_username("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, registration.user);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_conflicts_even_with_different_email() {
    let registrar = sqlite_registrar();

    registrar.register("alice", "a@x.com").await.unwrap();
    let err = registrar.register("alice", "b@y.com").await.unwrap_err();

    match err {
        RegisterError::Taken { cause } => assert!(cause.contains("username")),
        other => panic!("expected Taken, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn rendered_message_carries_the_credentials_link() {
    let registrar = memory_registrar();

    let registration = registrar.register("alice", "alice@example.org").await.unwrap();
    let expected_link = format!(
        "https://mint.test/credentials#?env=qa&username=alice&secret={}",
        registration.user.secret
    );

    assert!(registration.message.contains(&expected_link));
    assert!(registration
        .message
        .contains("Subject: Credentials for alice@mint.test"));
    assert!(registration.message.contains("To: alice@example.org"));
}

#[tokio::test(flavor = "multi_thread")]
async fn roll_password_changes_only_the_password() {
    let registrar = sqlite_registrar();

    let mut user = registrar.register("carol", "c@x.com").await.unwrap().user;
    let before = user.clone();

    registrar.roll_password(&mut user).await.unwrap();

    assert_ne!(user.password, before.password);
    assert_eq!(user.secret, before.secret);
    assert_eq!(user.username, before.username);
    assert_eq!(user.email, before.email);
    assert_eq!(user.token, before.token);

    // The store saw the same partial update.
    let reloaded = registrar
        .store()
        .load_by_username("carol")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.password, user.password);
    assert_eq!(reloaded.secret, before.secret);
}

#[tokio::test(flavor = "multi_thread")]
async fn verify_then_reload_shows_verified_with_mint_token() {
    let registrar = sqlite_registrar();

    let mut user = registrar.register("dave", "d@x.com").await.unwrap().user;
    registrar.verify(&mut user, "mintuser_42").await.unwrap();

    let reloaded = registrar
        .store()
        .load_by_username("dave")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, UserStatus::Verified);
    assert_eq!(reloaded.mint_token, Some("mintuser_42".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn two_registrations_never_share_credentials() {
    let registrar = memory_registrar();

    let a = registrar.register("usera", "a@x.com").await.unwrap().user;
    let b = registrar.register("userb", "b@x.com").await.unwrap().user;

    assert_ne!(a.token, b.token);
    assert_ne!(a.secret, b.secret);
    assert_ne!(a.password, b.password);
}
