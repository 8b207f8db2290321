//! Service layer for user registration and credential verification.

use crate::identity::{
    domain::{IdentityDomainError, PasswordDigest, User, UserId, Username, validate_password},
    ports::{CredentialRepository, CredentialRepositoryError},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Fixed input for the decoy digest computed at service construction.
///
/// Verifying a password for a nonexistent username runs the full hash
/// against this digest, so a username miss costs the same work as a
/// password mismatch.
const DECOY_PASSWORD: &str = "taskledger-decoy-credential";

/// Request payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Service-level errors for credential operations.
#[derive(Debug, Error)]
pub enum CredentialServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// The username is already registered.
    #[error("username already taken: {0}")]
    UsernameTaken(Username),

    /// The username/password pair did not resolve to a user.
    ///
    /// Deliberately identical for an unknown username and a wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The password hash could not be computed.
    #[error("password hashing failed: {0}")]
    Hashing(argon2::password_hash::Error),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(CredentialRepositoryError),
}

/// Result type for credential service operations.
pub type CredentialServiceResult<T> = Result<T, CredentialServiceError>;

/// Registration and verification orchestration service.
#[derive(Clone)]
pub struct CredentialService<R, C>
where
    R: CredentialRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    decoy_digest: PasswordDigest,
}

impl<R, C> CredentialService<R, C>
where
    R: CredentialRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new credential service.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Hashing`] when the decoy digest
    /// cannot be computed.
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> CredentialServiceResult<Self> {
        let decoy_digest = hash_password(DECOY_PASSWORD)?;
        Ok(Self {
            repository,
            clock,
            decoy_digest,
        })
    }

    /// Registers a new user, storing a salted one-way digest of the
    /// password.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Domain`] when the username or
    /// password fails validation,
    /// [`CredentialServiceError::UsernameTaken`] when the username already
    /// exists (the original credential is never overwritten), or
    /// [`CredentialServiceError::Repository`] when persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> CredentialServiceResult<User> {
        let RegisterUserRequest { username, password } = request;

        let validated_username = Username::new(username)?;
        validate_password(&password)?;

        let digest = hash_password(&password)?;
        let user = User::new(validated_username, digest, &*self.clock);

        self.repository
            .insert(&user)
            .await
            .map_err(|err| match err {
                CredentialRepositoryError::DuplicateUsername(taken) => {
                    CredentialServiceError::UsernameTaken(taken)
                }
                other => CredentialServiceError::Repository(other),
            })?;
        Ok(user)
    }

    /// Resolves a username/password pair to the registered user identity.
    ///
    /// The failure mode is observably uniform: an unknown username, a
    /// malformed username, and a wrong password all perform comparable
    /// hashing work and return the same
    /// [`CredentialServiceError::InvalidCredentials`].
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::InvalidCredentials`] when the pair
    /// does not resolve to a user, or
    /// [`CredentialServiceError::Repository`] when persistence fails.
    pub async fn verify(&self, username: &str, password: &str) -> CredentialServiceResult<UserId> {
        let Ok(parsed_username) = Username::new(username) else {
            verify_password(password, &self.decoy_digest);
            return Err(CredentialServiceError::InvalidCredentials);
        };

        let found = self
            .repository
            .find_by_username(&parsed_username)
            .await
            .map_err(CredentialServiceError::Repository)?;

        match found {
            Some(user) if verify_password(password, user.password_digest()) => Ok(user.id()),
            Some(_) => Err(CredentialServiceError::InvalidCredentials),
            None => {
                verify_password(password, &self.decoy_digest);
                Err(CredentialServiceError::InvalidCredentials)
            }
        }
    }
}

/// Hashes a plaintext password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> CredentialServiceResult<PasswordDigest> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(CredentialServiceError::Hashing)?;
    Ok(PasswordDigest::new(hash.to_string()))
}

/// Verifies a plaintext password against a stored PHC digest.
fn verify_password(password: &str, digest: &PasswordDigest) -> bool {
    PasswordHash::new(digest.as_str())
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
