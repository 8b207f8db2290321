//! Application services for access-controlled task management.

mod access;

pub use access::{
    CreateTaskRequest, TaskAccessError, TaskAccessResult, TaskAccessService, TaskSnapshot,
};
