//! Task aggregate root and status type.

use super::{ParseTaskStatusError, TaskId, TaskPatch, TaskTitle, lifecycle};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns whether this status marks the task finished.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// Every task belongs to exactly one owner, fixed at creation. The
/// completion invariants hold after every mutation: `is_finished` is true
/// iff the status is [`TaskStatus::Done`], and `finished_at` is set iff
/// `is_finished` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub finished_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task for the given owner.
    ///
    /// New tasks start in [`TaskStatus::Todo`] with no completion
    /// timestamp.
    #[must_use]
    pub fn new(
        owner: UserId,
        title: TaskTitle,
        description: Option<String>,
        deadline: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            owner,
            title,
            description,
            status: TaskStatus::Todo,
            deadline,
            finished_at: None,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            finished_at: data.finished_at,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_done()
    }

    /// Returns whether the task is expired at the given instant.
    ///
    /// Never true for a finished task; see
    /// [`lifecycle::is_expired`].
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        lifecycle::is_expired(self.deadline, self.is_finished(), now)
    }

    /// Assigns a new status, maintaining the completion invariants.
    pub fn apply_status(&mut self, new_status: TaskStatus, now: DateTime<Utc>) {
        let (status, finished_at) = lifecycle::apply_status(self.finished_at, new_status, now);
        self.status = status;
        self.finished_at = finished_at;
    }

    /// Applies a partial update; omitted fields retain their prior value.
    pub fn apply_patch(&mut self, patch: &TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(description) = patch.description() {
            self.description = Some(description.to_owned());
        }
        if let Some(deadline_update) = patch.deadline() {
            self.deadline = deadline_update;
        }
        if let Some(status) = patch.status() {
            self.apply_status(status, now);
        }
    }
}
