//! Signed session token issuance and validation.

use crate::config::SessionConfig;
use crate::identity::domain::UserId;
use crate::session::{
    domain::{SessionClaims, SessionError, SessionToken},
    ports::TokenVerifier,
};
use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use std::sync::Arc;
use uuid::Uuid;

/// Issues and validates HS256-signed session tokens.
///
/// The signing secret comes from [`SessionConfig`] and is process-wide;
/// tokens embed the user id and an absolute expiry a fixed duration after
/// issuance. Validation is stateless and recomputed per call.
#[derive(Clone)]
pub struct SessionIssuer<C>
where
    C: Clock + Send + Sync,
{
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    validation: Validation,
    clock: Arc<C>,
}

impl<C> SessionIssuer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an issuer from session settings and a clock.
    #[must_use]
    pub fn new(config: &SessionConfig, clock: Arc<C>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the injected clock instead, so the
        // boundary is exact and deterministic under test.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_secret.as_bytes()),
            token_ttl: config.token_ttl,
            validation,
            clock,
        }
    }

    /// Issues a signed token asserting the given user identity.
    ///
    /// The token expires a fixed duration after the current clock instant;
    /// there is no refresh path.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Issuance`] when the claims cannot be
    /// encoded.
    pub fn issue(&self, user_id: UserId) -> Result<SessionToken, SessionError> {
        let now = self.clock.utc();
        let expires_at = now + self.token_ttl;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let encoded = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| SessionError::Issuance)?;
        Ok(SessionToken::new(encoded))
    }
}

impl<C> TokenVerifier for SessionIssuer<C>
where
    C: Clock + Send + Sync,
{
    fn verify(&self, token: &str) -> Result<UserId, SessionError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| SessionError::Invalid)?;
        let claims = data.claims;

        // A token is valid strictly before its expiry instant.
        if self.clock.utc().timestamp() >= claims.exp {
            return Err(SessionError::Invalid);
        }

        let subject = Uuid::parse_str(&claims.sub).map_err(|_| SessionError::Invalid)?;
        Ok(UserId::from_uuid(subject))
    }
}
