//! Error types for session token operations.

use thiserror::Error;

/// Errors returned by session token issuance and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token failed the signature, shape, or expiry check.
    ///
    /// The failing check is deliberately not distinguished.
    #[error("invalid session token")]
    Invalid,

    /// The token could not be produced.
    #[error("session token issuance failed")]
    Issuance,
}
