//! Partial update descriptor for task mutations.

use super::{TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Describes a partial task update.
///
/// Omitted fields (`None`) retain their prior value. The deadline field is
/// doubly optional so the three payload shapes stay distinguishable:
/// absent (keep), present-with-null (clear), and present-with-value (set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    status: Option<TaskStatus>,
    deadline: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets or clears the deadline: `Some(instant)` sets it, `None` clears
    /// it. Leaving this builder uncalled keeps the prior deadline.
    #[must_use]
    pub const fn with_deadline(mut self, update: Option<DateTime<Utc>>) -> Self {
        self.deadline = Some(update);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the deadline update, if any: `Some(None)` clears the
    /// deadline, `Some(Some(instant))` sets it.
    #[must_use]
    pub const fn deadline(&self) -> Option<Option<DateTime<Utc>>> {
        self.deadline
    }
}
