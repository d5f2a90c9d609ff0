use thiserror::Error;

/// Unified error type for every fallible operation in the client.
///
/// Remote failures come in two flavors: `Api` when the backend answered with
/// its structured failure envelope, `Http` when it answered with an error
/// status but an unrecognized body. Both keep the original status so call
/// sites can branch on it after the fault translator has already notified
/// the user.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("HTTP error ({status})")]
    Http { status: u16, body: String },
    #[error("Network error: {detail}")]
    Network { detail: String },
    #[error("Decode error: {detail}")]
    Decode { detail: String },
    #[error("Invalid request: {detail}")]
    Request { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    pub fn request(detail: impl Into<String>) -> Self {
        Self::Request {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    /// HTTP status of the failed response, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::network(e.to_string())
    }
}
