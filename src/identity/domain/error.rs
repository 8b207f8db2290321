//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing domain identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the persisted column width.
    #[error("username '{0}' exceeds the maximum length")]
    UsernameTooLong(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}
