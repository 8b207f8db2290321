//! Port contracts for identity persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by identity
//! services.

pub mod repository;

pub use repository::{CredentialRepository, CredentialRepositoryError, CredentialRepositoryResult};
