//! In-memory credential repository for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{User, UserId, Username},
    ports::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult},
};

/// Thread-safe in-memory credential repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    state: Arc<RwLock<InMemoryCredentialState>>,
}

#[derive(Debug, Default)]
struct InMemoryCredentialState {
    users: HashMap<UserId, User>,
    username_index: HashMap<String, UserId>,
}

impl InMemoryCredentialRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn insert(&self, user: &User) -> CredentialRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CredentialRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.users.contains_key(&user.id()) {
            return Err(CredentialRepositoryError::DuplicateUser(user.id()));
        }

        let username_key = user.username().as_str().to_owned();
        if state.username_index.contains_key(&username_key) {
            return Err(CredentialRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }

        state.username_index.insert(username_key, user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> CredentialRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| {
            CredentialRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let user = state
            .username_index
            .get(username.as_str())
            .and_then(|user_id| state.users.get(user_id))
            .cloned();
        Ok(user)
    }
}
