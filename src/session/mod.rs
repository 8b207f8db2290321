//! Session tokens for Taskledger.
//!
//! This context issues and validates signed, time-limited identity tokens.
//! Validation is a stateless signature check — there is no server-side
//! session table, and an expired token cannot be refreshed; the caller must
//! re-authenticate. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
