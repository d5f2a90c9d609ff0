//! Builders for the backend's response envelope, for stubbed transports.

use serde::Serialize;

/// The failure shape the fault translator recognizes:
/// `{"error": true, "mensaje": "..."}`.
pub fn failure_body(message: &str) -> Vec<u8> {
    serde_json::json!({ "error": true, "mensaje": message })
        .to_string()
        .into_bytes()
}

/// A success envelope wrapping an arbitrary payload.
pub fn success_body<T: Serialize>(payload: &T) -> Vec<u8> {
    serde_json::json!({ "error": false, "mensaje": payload })
        .to_string()
        .into_bytes()
}
