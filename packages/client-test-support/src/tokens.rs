//! Signed fixture tokens for tests.
//!
//! The client never verifies signatures, but realistic fixtures keep the
//! tests honest about the wire shape: three segments, base64url payload,
//! the claim names the backend actually issues.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

/// Signing secret for fixtures; the client under test never checks it.
pub const TEST_SECRET: &[u8] = b"test_secret_key_for_client_tests_only";

#[derive(Debug, Serialize)]
struct FixtureClaims {
    username: String,
    rol: String,
    exp: i64,
    id: i64,
}

/// Mint an HS256 token with the given role and expiry.
pub fn mint(username: &str, role: &str, exp: i64) -> String {
    mint_with_id(username, role, exp, 1)
}

/// Mint an HS256 token carrying an explicit user id claim.
pub fn mint_with_id(username: &str, role: &str, exp: i64, id: i64) -> String {
    let claims = FixtureClaims {
        username: username.to_string(),
        rol: role.to_string(),
        exp,
        id,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("fixture token encoding cannot fail")
}
