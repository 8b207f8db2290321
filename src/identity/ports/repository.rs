//! Repository port for credential persistence and lookup.

use crate::identity::domain::{User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential repository operations.
pub type CredentialRepositoryResult<T> = Result<T, CredentialRepositoryError>;

/// Credential persistence contract.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialRepositoryError::DuplicateUsername`] when the
    /// username is already registered, or
    /// [`CredentialRepositoryError::DuplicateUser`] when the user ID already
    /// exists. An existing credential is never overwritten.
    async fn insert(&self, user: &User) -> CredentialRepositoryResult<()>;

    /// Finds a user by exact, case-sensitive username.
    ///
    /// Returns `None` when no user has the given username.
    async fn find_by_username(&self, username: &Username)
    -> CredentialRepositoryResult<Option<User>>;
}

/// Errors returned by credential repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// A user with the same username already exists.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
