//! Integration test for JWT session tokens.
//!
//! Tokens are minted and verified with the same HS256 secret the server
//! would use. No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use spa_booking_backend::utils::jwt::{create_token, verify_token};

/// A fake secret for testing only.
const TEST_SECRET: &str = "test-secret-long-enough-for-hs256-xxxxxxxxxxxxxxxxxx";

#[test]
fn token_round_trips_identity_and_email() {
    let identity_id = Uuid::new_v4();
    let token = create_token(identity_id, "alice@example.com", TEST_SECRET, 24)
        .expect("Token should mint");

    let claims = verify_token(&token, TEST_SECRET).expect("Token should verify");

    assert_eq!(claims.sub, identity_id);
    assert_eq!(claims.email, "alice@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn expired_token_is_rejected() {
    #[derive(Serialize)]
    struct StaleClaims {
        sub: Uuid,
        email: String,
        exp: i64,
        iat: i64,
    }

    let now = Utc::now();
    let claims = StaleClaims {
        sub: Uuid::new_v4(),
        email: "expired@example.com".to_string(),
        // Expired well past the default leeway
        exp: (now - Duration::minutes(10)).timestamp(),
        iat: (now - Duration::hours(1)).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(verify_token(&token, TEST_SECRET).is_err());
}

#[test]
fn wrong_secret_is_rejected() {
    let token = create_token(Uuid::new_v4(), "bob@example.com", TEST_SECRET, 24).unwrap();

    assert!(verify_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxx").is_err());
}

#[test]
fn garbage_token_is_rejected() {
    assert!(verify_token("not.a.valid.jwt", TEST_SECRET).is_err());
}
