//! Repository port for owner-scoped task persistence.

use crate::identity::domain::UserId;
use crate::task::domain::{Task, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup combines the task id and the owner id in a single
/// predicate. A task owned by another user is indistinguishable from a
/// task that does not exist; there is no fetch-then-check-owner path. "Not
/// found" is an `Option`/`bool` outcome at this layer, not an error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all tasks owned by the given user, ordered by creation time
    /// descending (newest first). Tasks created at the same instant order
    /// most recently inserted first. The result is a restartable snapshot,
    /// not a live stream.
    async fn list_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Atomically applies a partial update to the task matching both the
    /// id and the owner, stamping status changes with `now`.
    ///
    /// The read-modify-write runs as a single all-or-nothing unit per
    /// operation; concurrent updates to the same task serialize. Patch
    /// semantics are the domain's
    /// [`Task::apply_patch`](crate::task::domain::Task::apply_patch).
    ///
    /// Returns `None` when no task matches the combined predicate.
    async fn update_for_owner(
        &self,
        owner: UserId,
        id: TaskId,
        patch: &TaskPatch,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes the task matching both the id and the owner.
    ///
    /// Returns `false` when no task matched the combined predicate.
    async fn delete_for_owner(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
