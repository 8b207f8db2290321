//! Explicit process configuration.
//!
//! Configuration is passed in explicitly rather than read from ambient
//! globals. [`Config`] bundles the server bind address, database URL, and
//! the [`SessionConfig`] that governs token signing and lifetime.

use std::net::SocketAddr;

use chrono::Duration;

/// Default session-token lifetime, in seconds (one hour).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Session-token signing and lifetime settings.
///
/// The signing secret is process-wide and is not rotated within a process
/// lifetime; `token_ttl` is the fixed duration from issuance to expiry.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Process-wide secret used to sign and verify session tokens.
    pub signing_secret: String,
    /// Fixed lifetime of an issued token, measured from its issue instant.
    pub token_ttl: Duration,
}

impl SessionConfig {
    /// Creates session settings with an explicit token lifetime.
    #[must_use]
    pub fn new(signing_secret: impl Into<String>, token_ttl: Duration) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            token_ttl,
        }
    }

    /// Creates session settings using the default token lifetime
    /// ([`DEFAULT_TOKEN_TTL_SECS`]).
    #[must_use]
    pub fn with_default_ttl(signing_secret: impl Into<String>) -> Self {
        Self::new(signing_secret, Duration::seconds(DEFAULT_TOKEN_TTL_SECS))
    }
}

/// Top-level process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Connection URL for the `PostgreSQL` database.
    pub database_url: String,
    /// Session-token signing and lifetime settings.
    pub session: SessionConfig,
}
