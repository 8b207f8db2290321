//! Access-controlled task service.
//!
//! Every operation resolves the caller's bearer token to an owner identity
//! before touching the repository; no operation accepts a caller-supplied
//! owner id. This is the only path by which a request's declared identity
//! is trusted.

use crate::identity::domain::UserId;
use crate::session::ports::TokenVerifier;
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            deadline: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Read model for a task at a particular instant.
///
/// Carries every stored field plus the derived `is_expired` flag, which is
/// computed against the service clock when the snapshot is taken and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Whether the task is finished.
    pub is_finished: bool,
    /// Whether the deadline has passed on an unfinished task.
    pub is_expired: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Completion timestamp, set while the task is done.
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskSnapshot {
    /// Captures a task's state as observed at `now`.
    #[must_use]
    pub fn capture(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status(),
            is_finished: task.is_finished(),
            is_expired: task.is_expired_at(now),
            created_at: task.created_at(),
            deadline: task.deadline(),
            finished_at: task.finished_at(),
        }
    }
}

/// Service-level errors for access-controlled task operations.
#[derive(Debug, Error)]
pub enum TaskAccessError {
    /// The bearer token was missing, malformed, expired, or forged.
    ///
    /// Terminal for the request; the caller must re-authenticate.
    #[error("missing or invalid session token")]
    Unauthorized,

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task matched the id for the authenticated owner.
    ///
    /// Deliberately indistinguishable from an ownership violation.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for access-controlled task operations.
pub type TaskAccessResult<T> = Result<T, TaskAccessError>;

/// Access-controlled task orchestration service.
#[derive(Clone)]
pub struct TaskAccessService<R, V, C>
where
    R: TaskRepository,
    V: TokenVerifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    verifier: Arc<V>,
    clock: Arc<C>,
}

impl<R, V, C> TaskAccessService<R, V, C>
where
    R: TaskRepository,
    V: TokenVerifier,
    C: Clock + Send + Sync,
{
    /// Creates a new access-controlled task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, verifier: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            repository,
            verifier,
            clock,
        }
    }

    /// Creates a task owned by the token's user.
    ///
    /// New tasks start in `todo` with no completion timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Unauthorized`] when the token fails
    /// verification, [`TaskAccessError::Domain`] when the title fails
    /// validation, or [`TaskAccessError::Repository`] when persistence
    /// fails.
    pub async fn create_task(
        &self,
        token: &str,
        request: CreateTaskRequest,
    ) -> TaskAccessResult<Task> {
        let owner = self.authorize(token)?;
        let CreateTaskRequest {
            title,
            description,
            deadline,
        } = request;

        let validated_title = TaskTitle::new(title)?;
        let task = Task::new(owner, validated_title, description, deadline, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Lists the token's user's tasks, newest first.
    ///
    /// Each snapshot includes `is_expired` computed at read time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Unauthorized`] when the token fails
    /// verification, or [`TaskAccessError::Repository`] when persistence
    /// fails.
    pub async fn list_tasks(&self, token: &str) -> TaskAccessResult<Vec<TaskSnapshot>> {
        let owner = self.authorize(token)?;
        let tasks = self.repository.list_for_owner(owner).await?;
        let now = self.clock.utc();
        Ok(tasks
            .iter()
            .map(|task| TaskSnapshot::capture(task, now))
            .collect())
    }

    /// Applies a partial update to one of the token's user's tasks.
    ///
    /// Omitted fields retain their prior value; status changes are stamped
    /// with the current clock instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Unauthorized`] when the token fails
    /// verification, [`TaskAccessError::NotFound`] when no task matches the
    /// id for this owner, or [`TaskAccessError::Repository`] when
    /// persistence fails.
    pub async fn update_task(
        &self,
        token: &str,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskAccessResult<Task> {
        let owner = self.authorize(token)?;
        let now = self.clock.utc();
        self.repository
            .update_for_owner(owner, id, patch, now)
            .await?
            .ok_or(TaskAccessError::NotFound(id))
    }

    /// Deletes one of the token's user's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Unauthorized`] when the token fails
    /// verification, [`TaskAccessError::NotFound`] when no task matches the
    /// id for this owner, or [`TaskAccessError::Repository`] when
    /// persistence fails.
    pub async fn delete_task(&self, token: &str, id: TaskId) -> TaskAccessResult<()> {
        let owner = self.authorize(token)?;
        if self.repository.delete_for_owner(owner, id).await? {
            Ok(())
        } else {
            Err(TaskAccessError::NotFound(id))
        }
    }

    /// Resolves the bearer token to an owner identity.
    fn authorize(&self, token: &str) -> TaskAccessResult<UserId> {
        self.verifier
            .verify(token)
            .map_err(|_| TaskAccessError::Unauthorized)
    }
}
