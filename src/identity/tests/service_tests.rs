//! Service orchestration tests for registration and verification.

use std::sync::Arc;

use crate::identity::{
    adapters::memory::InMemoryCredentialRepository,
    domain::Username,
    ports::CredentialRepository,
    services::{CredentialService, CredentialServiceError, RegisterUserRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = CredentialService<InMemoryCredentialRepository, DefaultClock>;

#[fixture]
fn repository() -> Arc<InMemoryCredentialRepository> {
    Arc::new(InMemoryCredentialRepository::new())
}

fn service_over(repository: Arc<InMemoryCredentialRepository>) -> TestService {
    CredentialService::new(repository, Arc::new(DefaultClock))
        .expect("service construction should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_stores_digest_not_plaintext(repository: Arc<InMemoryCredentialRepository>) {
    let service = service_over(Arc::clone(&repository));
    service
        .register(RegisterUserRequest::new("alice", "pw1"))
        .await
        .expect("registration should succeed");

    let username = Username::new("alice").expect("valid username");
    let stored = repository
        .find_by_username(&username)
        .await
        .expect("lookup should succeed")
        .expect("user should exist");

    let digest = stored.password_digest().as_str();
    assert!(digest.starts_with("$argon2"));
    assert!(!digest.contains("pw1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_yields_conflict_and_keeps_original(
    repository: Arc<InMemoryCredentialRepository>,
) {
    let service = service_over(repository);
    let original = service
        .register(RegisterUserRequest::new("alice", "pw1"))
        .await
        .expect("first registration should succeed");

    let result = service
        .register(RegisterUserRequest::new("alice", "pw2"))
        .await;
    assert!(matches!(
        result,
        Err(CredentialServiceError::UsernameTaken(_))
    ));

    // The original credential survives: its password still verifies and
    // the losing password does not.
    let verified = service
        .verify("alice", "pw1")
        .await
        .expect("original password should verify");
    assert_eq!(verified, original.id());
    assert!(service.verify("alice", "pw2").await.is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verify_resolves_registered_user(repository: Arc<InMemoryCredentialRepository>) {
    let service = service_over(repository);
    let user = service
        .register(RegisterUserRequest::new("bob", "hunter2"))
        .await
        .expect("registration should succeed");

    let verified = service
        .verify("bob", "hunter2")
        .await
        .expect("verification should succeed");
    assert_eq!(verified, user.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_fails_identically_to_wrong_password(
    repository: Arc<InMemoryCredentialRepository>,
) {
    let service = service_over(repository);
    service
        .register(RegisterUserRequest::new("alice", "pw1"))
        .await
        .expect("registration should succeed");

    let wrong_password = service
        .verify("alice", "wrong")
        .await
        .expect_err("wrong password should fail");
    let unknown_user = service
        .verify("nobody", "wrong")
        .await
        .expect_err("unknown user should fail");
    let malformed_username = service
        .verify("   ", "wrong")
        .await
        .expect_err("malformed username should fail");

    // Same variant, same message: the caller cannot tell which check
    // failed.
    assert!(matches!(
        wrong_password,
        CredentialServiceError::InvalidCredentials
    ));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert_eq!(wrong_password.to_string(), malformed_username.to_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_password_hashes_to_distinct_digests(repository: Arc<InMemoryCredentialRepository>) {
    let service = service_over(Arc::clone(&repository));
    service
        .register(RegisterUserRequest::new("alice", "shared"))
        .await
        .expect("registration should succeed");
    service
        .register(RegisterUserRequest::new("bob", "shared"))
        .await
        .expect("registration should succeed");

    let alice = repository
        .find_by_username(&Username::new("alice").expect("valid username"))
        .await
        .expect("lookup should succeed")
        .expect("alice should exist");
    let bob = repository
        .find_by_username(&Username::new("bob").expect("valid username"))
        .await
        .expect("lookup should succeed")
        .expect("bob should exist");

    assert_ne!(
        alice.password_digest().as_str(),
        bob.password_digest().as_str()
    );
}

#[rstest]
#[case("", "pw")]
#[case("alice", "")]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_invalid_input(
    repository: Arc<InMemoryCredentialRepository>,
    #[case] username: &str,
    #[case] password: &str,
) {
    let service = service_over(repository);
    let result = service
        .register(RegisterUserRequest::new(username, password))
        .await;
    assert!(matches!(result, Err(CredentialServiceError::Domain(_))));
}
