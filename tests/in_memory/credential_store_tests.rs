//! Credential repository behavior through the port contract.

use super::helpers::user_named;
use taskledger::identity::{
    adapters::memory::InMemoryCredentialRepository,
    domain::Username,
    ports::{CredentialRepository, CredentialRepositoryError},
};

#[tokio::test(flavor = "multi_thread")]
async fn stored_user_is_found_by_username() {
    let repository = InMemoryCredentialRepository::new();
    let user = user_named("alice");
    repository.insert(&user).await.expect("insert should succeed");

    let found = repository
        .find_by_username(&Username::new("alice").expect("valid username"))
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(user));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_username_returns_none() {
    let repository = InMemoryCredentialRepository::new();
    let found = repository
        .find_by_username(&Username::new("nobody").expect("valid username"))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_is_rejected_without_overwrite() {
    let repository = InMemoryCredentialRepository::new();
    let original = user_named("alice");
    repository
        .insert(&original)
        .await
        .expect("first insert should succeed");

    let duplicate = user_named("alice");
    let result = repository.insert(&duplicate).await;
    assert!(matches!(
        result,
        Err(CredentialRepositoryError::DuplicateUsername(_))
    ));

    let found = repository
        .find_by_username(&Username::new("alice").expect("valid username"))
        .await
        .expect("lookup should succeed")
        .expect("user should exist");
    assert_eq!(found.id(), original.id());
}

#[tokio::test(flavor = "multi_thread")]
async fn usernames_are_case_sensitive() {
    let repository = InMemoryCredentialRepository::new();
    let capitalized = user_named("Alice");
    let lowercase = user_named("alice");

    repository
        .insert(&capitalized)
        .await
        .expect("insert should succeed");
    repository
        .insert(&lowercase)
        .await
        .expect("differently-cased username should not conflict");

    let found_upper = repository
        .find_by_username(&Username::new("Alice").expect("valid username"))
        .await
        .expect("lookup should succeed")
        .expect("user should exist");
    assert_eq!(found_upper.id(), capitalized.id());
}
