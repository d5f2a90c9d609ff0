use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

/// Opaque bearer token exactly as issued by the backend.
///
/// The client never verifies the signature; it only stores the string and
/// reads claims out of the payload segment on a best-effort basis.
#[derive(Clone, PartialEq, Eq)]
pub struct RawToken(String);

impl RawToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Redacts the token value so it never lands in logs whole.
impl fmt::Debug for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 8 {
            write!(f, "RawToken(\"***\")")
        } else {
            write!(f, "RawToken(\"{}***\")", &self.0[..8])
        }
    }
}

/// Claims read (unverified) from a token's payload segment.
///
/// Every field is optional: a malformed or foreign token degrades to absent
/// values, never to an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub username: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    /// Expiry in seconds since the Unix epoch
    pub exp: Option<i64>,
    id: Option<i64>,
    #[serde(rename = "userId")]
    user_id: Option<i64>,
    sub: Option<serde_json::Value>,
}

impl Claims {
    /// Best-effort decode of the payload segment of a JWT-shaped token.
    ///
    /// Splits on `.`, base64-decodes the second segment and parses it as
    /// JSON. Any failure returns `None`; this must hold for adversarial
    /// input, so nothing here panics or propagates an error.
    pub fn decode(token: &RawToken) -> Option<Claims> {
        let payload = match token.as_str().split('.').nth(1) {
            Some(segment) => segment,
            None => {
                debug!("token has no payload segment");
                return None;
            }
        };

        // Tokens are base64url without padding; tolerate the standard
        // alphabet as well, the way browser-side decoders do.
        let bytes = match URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| STANDARD.decode(payload))
        {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(error = %e, "token payload is not valid base64");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "token payload is not a valid claims object");
                None
            }
        }
    }

    /// Subject identifier, searched across the claim names different token
    /// issuers use: `id`, then `userId`, then `sub`.
    pub fn subject_id(&self) -> Option<i64> {
        if let Some(id) = self.id {
            return Some(id);
        }
        if let Some(user_id) = self.user_id {
            return Some(user_id);
        }
        match &self.sub {
            Some(serde_json::Value::Number(n)) => n.as_i64(),
            Some(serde_json::Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    }
}
