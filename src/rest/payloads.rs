//! JSON request and response bodies for the HTTP boundary.

use crate::task::domain::{TaskDomainError, TaskPatch, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Username/password pair for registration and login.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsPayload {
    /// Requested or asserted username.
    pub username: String,
    /// Plaintext password; hashed immediately, never stored.
    pub password: String,
}

/// Response body carrying the identifier of a newly created resource.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedBody {
    /// Identifier of the created resource.
    pub id: Uuid,
}

/// Response body carrying a freshly issued session token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenBody {
    /// Encoded bearer token.
    pub token: String,
}

/// Response body acknowledging a successful mutation.
#[derive(Debug, Clone, Serialize)]
pub struct OkBody {
    /// Always `true` on success.
    pub ok: bool,
}

/// Error envelope returned on every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskPayload {
    /// Required task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional deadline as an RFC 3339 timestamp.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// Request body for partially updating a task.
///
/// Absent fields retain their stored value. The deadline distinguishes an
/// absent field from an explicit `null`: `null` clears the deadline.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskPayload {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Deadline update: absent keeps, `null` clears, a timestamp sets.
    #[serde(default, deserialize_with = "explicit_null")]
    pub deadline: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskPayload {
    /// Converts the payload into a validated domain patch.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the replacement title fails
    /// validation.
    pub fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let Self {
            title,
            description,
            status,
            deadline,
        } = self;

        let mut patch = TaskPatch::new();
        if let Some(raw_title) = title {
            patch = patch.with_title(TaskTitle::new(raw_title)?);
        }
        if let Some(text) = description {
            patch = patch.with_description(text);
        }
        if let Some(new_status) = status {
            patch = patch.with_status(new_status);
        }
        if let Some(update) = deadline {
            patch = patch.with_deadline(update);
        }
        Ok(patch)
    }
}

/// Deserializes a present-but-possibly-null field into `Some(inner)`, so a
/// missing field (`None` via `#[serde(default)]`) stays distinguishable
/// from an explicit `null` (`Some(None)`).
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
}
