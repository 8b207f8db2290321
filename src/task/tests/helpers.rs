//! Shared fixtures for task unit tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::identity::domain::UserId;
use crate::session::{domain::SessionError, ports::TokenVerifier};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to an adjustable instant, so tests can observe the exact
/// timestamps that mutations stamp.
pub struct AdjustableClock {
    instant: RwLock<DateTime<Utc>>,
}

impl AdjustableClock {
    /// Creates a clock starting at the given instant.
    pub fn starting_at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: Duration) {
        let mut instant = self.instant.write().expect("clock lock should not poison");
        *instant += delta;
    }
}

impl Clock for AdjustableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.instant.read().expect("clock lock should not poison")
    }
}

/// Token verifier backed by a fixed token-to-identity table.
#[derive(Debug, Default)]
pub struct StubVerifier {
    identities: HashMap<String, UserId>,
}

impl StubVerifier {
    /// Creates an empty verifier that rejects every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token that verifies to the given identity.
    pub fn with_identity(mut self, token: impl Into<String>, user_id: UserId) -> Self {
        self.identities.insert(token.into(), user_id);
        self
    }
}

impl TokenVerifier for StubVerifier {
    fn verify(&self, token: &str) -> Result<UserId, SessionError> {
        self.identities
            .get(token)
            .copied()
            .ok_or(SessionError::Invalid)
    }
}

/// A fixed reference instant for deterministic tests.
pub fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}
