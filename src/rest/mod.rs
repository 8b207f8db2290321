//! HTTP boundary for Taskledger.
//!
//! A thin axum layer over the application services: JSON in, JSON out,
//! bearer credential in the `Authorization` header. The router is generic
//! over the repository and clock types so tests can drive it end to end
//! with in-memory adapters.

pub mod error;
mod handlers;
pub mod payloads;

pub use error::ApiError;

use crate::config::SessionConfig;
use crate::identity::{
    ports::CredentialRepository,
    services::{CredentialService, CredentialServiceResult},
};
use crate::session::services::SessionIssuer;
use crate::task::{ports::TaskRepository, services::TaskAccessService};
use axum::Router;
use mockable::Clock;
use std::sync::Arc;

/// Shared application state handed to every request handler.
pub struct AppState<CR, TR, C>
where
    CR: CredentialRepository,
    TR: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Registration and credential verification service.
    pub credentials: CredentialService<CR, C>,
    /// Session token issuer, shared with the task service for validation.
    pub sessions: Arc<SessionIssuer<C>>,
    /// Access-controlled task service.
    pub tasks: TaskAccessService<TR, SessionIssuer<C>, C>,
}

impl<CR, TR, C> AppState<CR, TR, C>
where
    CR: CredentialRepository,
    TR: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires the application services over the given repositories, session
    /// settings, and clock.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialServiceError`](crate::identity::services::CredentialServiceError)
    /// when the credential service cannot be constructed.
    pub fn new(
        credential_repository: Arc<CR>,
        task_repository: Arc<TR>,
        session: &SessionConfig,
        clock: Arc<C>,
    ) -> CredentialServiceResult<Self> {
        let sessions = Arc::new(SessionIssuer::new(session, Arc::clone(&clock)));
        let credentials = CredentialService::new(credential_repository, Arc::clone(&clock))?;
        let tasks = TaskAccessService::new(task_repository, Arc::clone(&sessions), clock);
        Ok(Self {
            credentials,
            sessions,
            tasks,
        })
    }
}

/// Builds the application router with all routes nested under `/api`.
#[must_use]
pub fn router<CR, TR, C>(state: Arc<AppState<CR, TR, C>>) -> Router
where
    CR: CredentialRepository + 'static,
    TR: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", handlers::routes())
        .with_state(state)
}
