//! Token verification port.

use crate::identity::domain::UserId;
use crate::session::domain::SessionError;

/// Contract for resolving a bearer token into a verified user identity.
///
/// Verification is synchronous: it is a pure signature and expiry check
/// with no blocking I/O.
pub trait TokenVerifier: Send + Sync {
    /// Verifies a token and returns the user identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Invalid`] when the signature does not
    /// verify, the payload is malformed, or the token has expired.
    fn verify(&self, token: &str) -> Result<UserId, SessionError>;
}
