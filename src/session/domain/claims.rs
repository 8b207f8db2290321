//! Signed token payload.

use serde::{Deserialize, Serialize};

/// Claims embedded in each issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user identifier as a UUID string.
    pub sub: String,
    /// Issuance instant, seconds since the Unix epoch.
    pub iat: i64,
    /// Absolute expiry, seconds since the Unix epoch.
    pub exp: i64,
}
