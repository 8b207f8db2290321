//! Credential management for Taskledger.
//!
//! This context covers user registration and credential verification:
//! validating usernames, hashing passwords with Argon2id, and resolving a
//! username/password pair to a user identity without revealing whether the
//! username exists. The module follows hexagonal architecture:
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
