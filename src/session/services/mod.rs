//! Application services for session token management.

mod issuer;

pub use issuer::SessionIssuer;
