//! Pure lifecycle rules for completion and expiry.
//!
//! These functions take plain values and return plain values so the rules
//! can be unit-tested without any persistence layer. Aggregate methods on
//! [`Task`](super::Task) delegate here.

use super::TaskStatus;
use chrono::{DateTime, Utc};

/// Applies a status transition, returning the new status and `finished_at`.
///
/// Entering [`TaskStatus::Done`] from an unfinished state stamps
/// `finished_at` with `now`. Re-affirming `Done` keeps the original
/// timestamp — the transition is idempotent. Any non-`Done` target clears
/// `finished_at`, regardless of prior state. Every status is reachable from
/// every status; "already done" is a normal transition, not an error.
#[must_use]
pub fn apply_status(
    current_finished_at: Option<DateTime<Utc>>,
    new_status: TaskStatus,
    now: DateTime<Utc>,
) -> (TaskStatus, Option<DateTime<Utc>>) {
    let finished_at = match (new_status, current_finished_at) {
        (TaskStatus::Done, Some(existing)) => Some(existing),
        (TaskStatus::Done, None) => Some(now),
        _ => None,
    };
    (new_status, finished_at)
}

/// Read-time expiry check.
///
/// A task is expired when a deadline is set, the deadline is strictly in
/// the past, and the task is not finished. A finished task is never
/// expired, regardless of its deadline. The result is computed at read
/// time and never persisted.
#[must_use]
pub fn is_expired(deadline: Option<DateTime<Utc>>, is_finished: bool, now: DateTime<Utc>) -> bool {
    deadline.is_some_and(|deadline_at| !is_finished && now > deadline_at)
}
