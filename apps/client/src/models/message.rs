use serde::{Deserialize, Serialize};

/// The backend's generic response envelope: a failure flag plus a payload
/// whose type varies per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage<T> {
    pub error: bool,
    #[serde(rename = "mensaje")]
    pub message: T,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
