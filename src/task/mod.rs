//! Task ownership and lifecycle management for Taskledger.
//!
//! This context covers the owned-task model: creating tasks for an
//! authenticated user, listing them newest-first, applying partial updates
//! with completion-state bookkeeping, and deleting them. Ownership is
//! enforced inside the lookup predicate — a task owned by someone else is
//! indistinguishable from a task that does not exist. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
