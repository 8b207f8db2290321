//! User aggregate root and credential material.

use super::{IdentityDomainError, UserId, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Opaque password digest in PHC string format.
///
/// The digest is one-way material produced by an adaptive hash; the
/// plaintext password is never stored. The wrapper deliberately implements
/// neither serde traits nor a revealing `Debug`, so the digest cannot leak
/// through serialization or logging.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wraps an already-computed PHC digest string.
    #[must_use]
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Returns the PHC digest string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

/// Validates a candidate plaintext password.
///
/// # Errors
///
/// Returns [`IdentityDomainError::EmptyPassword`] when the password is
/// empty.
pub const fn validate_password(password: &str) -> Result<(), IdentityDomainError> {
    if password.is_empty() {
        return Err(IdentityDomainError::EmptyPassword);
    }
    Ok(())
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_digest: PasswordDigest,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted password digest.
    pub password_digest: PasswordDigest,
    /// Persisted registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user at registration time.
    #[must_use]
    pub fn new(username: Username, password_digest: PasswordDigest, clock: &impl Clock) -> Self {
        Self {
            id: UserId::new(),
            username,
            password_digest,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            password_digest: data.password_digest,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
