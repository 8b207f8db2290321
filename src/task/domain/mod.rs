//! Domain model for owned tasks.
//!
//! The task domain models per-user task records, partial updates, and the
//! pure lifecycle rules for completion and expiry, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
pub mod lifecycle;
mod patch;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use patch::TaskPatch;
pub use task::{PersistedTaskData, Task, TaskStatus};
