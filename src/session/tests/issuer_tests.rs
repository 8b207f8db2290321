//! Issuance and validation tests for signed session tokens.

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::identity::domain::UserId;
use crate::session::{domain::SessionClaims, ports::TokenVerifier, services::SessionIssuer};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

const SECRET: &str = "test-signing-secret";

/// Clock pinned to a fixed instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn issuance_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn issuer_at(instant: DateTime<Utc>, secret: &str) -> SessionIssuer<FixedClock> {
    let config = SessionConfig::with_default_ttl(secret);
    SessionIssuer::new(&config, Arc::new(FixedClock(instant)))
}

#[fixture]
fn user_id() -> UserId {
    UserId::new()
}

#[rstest]
fn issued_token_verifies_to_the_same_user(user_id: UserId) {
    let issuer = issuer_at(issuance_instant(), SECRET);
    let token = issuer.issue(user_id).expect("issuance should succeed");

    let verified = issuer
        .verify(token.as_str())
        .expect("verification should succeed");
    assert_eq!(verified, user_id);
}

#[rstest]
#[case(Duration::seconds(1), true)]
#[case(Duration::seconds(3599), true)]
#[case(Duration::seconds(3600), false)]
#[case(Duration::seconds(3601), false)]
#[case(Duration::days(30), false)]
fn token_is_valid_strictly_before_its_expiry_instant(
    user_id: UserId,
    #[case] elapsed: Duration,
    #[case] expect_valid: bool,
) {
    let issued_at = issuance_instant();
    let token = issuer_at(issued_at, SECRET)
        .issue(user_id)
        .expect("issuance should succeed");

    let verifier = issuer_at(issued_at + elapsed, SECRET);
    assert_eq!(verifier.verify(token.as_str()).is_ok(), expect_valid);
}

#[rstest]
fn expired_token_stays_invalid_with_no_refresh_path(user_id: UserId) {
    let issued_at = issuance_instant();
    let token = issuer_at(issued_at, SECRET)
        .issue(user_id)
        .expect("issuance should succeed");

    let after_expiry = issuer_at(issued_at + Duration::hours(2), SECRET);
    assert!(after_expiry.verify(token.as_str()).is_err());
    // Repeated validation of the same token keeps failing.
    assert!(after_expiry.verify(token.as_str()).is_err());
}

#[rstest]
fn tampered_token_is_rejected(user_id: UserId) {
    let issuer = issuer_at(issuance_instant(), SECRET);
    let token = issuer
        .issue(user_id)
        .expect("issuance should succeed")
        .into_inner();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('A');

    assert!(issuer.verify(&tampered).is_err());
}

#[rstest]
fn token_signed_with_a_different_secret_is_rejected(user_id: UserId) {
    let instant = issuance_instant();
    let foreign_token = issuer_at(instant, "some-other-secret")
        .issue(user_id)
        .expect("issuance should succeed");

    let issuer = issuer_at(instant, SECRET);
    assert!(issuer.verify(foreign_token.as_str()).is_err());
}

#[rstest]
#[case("")]
#[case("not-a-token")]
#[case("aaaa.bbbb.cccc")]
fn malformed_tokens_are_rejected(#[case] garbage: &str) {
    let issuer = issuer_at(issuance_instant(), SECRET);
    assert!(issuer.verify(garbage).is_err());
}

#[rstest]
fn token_with_a_non_uuid_subject_is_rejected() {
    let instant = issuance_instant();
    let claims = SessionClaims {
        sub: "not-a-uuid".to_owned(),
        iat: instant.timestamp(),
        exp: (instant + Duration::hours(1)).timestamp(),
    };
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encoding should succeed");

    let issuer = issuer_at(instant, SECRET);
    assert!(issuer.verify(&forged).is_err());
}
