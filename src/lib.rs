//! Taskledger: an authenticated personal task-tracking API.
//!
//! Users register with a username and password, authenticate to obtain a
//! signed session token, and manage their own to-do items with optional
//! deadlines and completion state. Every task is owned by exactly one user
//! and is never visible to anyone else.
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`identity`]: Credential storage, registration, and verification
//! - [`session`]: Signed, time-limited session tokens
//! - [`task`]: Task ownership, lifecycle rules, and the access-controlled
//!   task service
//! - [`rest`]: The axum HTTP boundary
//! - [`config`]: Explicit process configuration

pub mod config;
pub mod identity;
pub mod rest;
pub mod session;
pub mod task;
