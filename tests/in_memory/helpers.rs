//! Shared fixtures for in-memory adapter tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use taskledger::identity::domain::{PasswordDigest, User, UserId, Username};
use taskledger::task::domain::{Task, TaskTitle};

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A fixed reference instant for deterministic tests.
pub fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a user with a placeholder digest.
pub fn user_named(name: &str) -> User {
    User::new(
        Username::new(name).expect("valid username"),
        PasswordDigest::new("$argon2id$v=19$m=19456,t=2,p=1$placeholder$digest"),
        &FixedClock(base_instant()),
    )
}

/// Builds a task created at the given instant.
pub fn task_created_at(owner: UserId, title: &str, instant: DateTime<Utc>) -> Task {
    Task::new(
        owner,
        TaskTitle::new(title).expect("valid title"),
        None,
        None,
        &FixedClock(instant),
    )
}
