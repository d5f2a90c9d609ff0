use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::ClientError;
use crate::http::middleware::{Middleware, Next, Request, Response};
use crate::notify::Notifier;

/// Toast text used when a failure carries no recognizable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Surfaces every failed exchange as an error toast, then re-signals the
/// failure to the caller.
///
/// This stage is the single chokepoint for generic error notification: call
/// sites may react to the returned error (re-enable a form, roll back local
/// state) but must not re-notify generically.
pub struct FaultTranslator {
    notifier: Notifier,
}

impl FaultTranslator {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl Middleware for FaultTranslator {
    async fn handle(&self, req: Request, next: Next<'_>) -> Result<Response, ClientError> {
        match next.run(req).await {
            Ok(resp) if resp.is_success() => Ok(resp),
            Ok(resp) => {
                let status = resp.status.as_u16();
                let err = match recognized_failure(&resp.body) {
                    Some(message) => {
                        self.notifier.error(&message);
                        ClientError::api(status, message)
                    }
                    None => {
                        debug!(status, "failure body has no recognized shape");
                        self.notifier.error(FALLBACK_ERROR_MESSAGE);
                        ClientError::http(status, String::from_utf8_lossy(&resp.body))
                    }
                };
                Err(err)
            }
            Err(err) => {
                self.notifier.error(FALLBACK_ERROR_MESSAGE);
                Err(err)
            }
        }
    }
}

/// The backend's structured failure envelope: `{"error": true, "mensaje": "..."}`.
/// Anything else, including `error: false` and non-string messages, is
/// unrecognized and takes the fallback path.
fn recognized_failure(body: &Bytes) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    if !value.get("error")?.as_bool()? {
        return None;
    }
    value.get("mensaje")?.as_str().map(str::to_owned)
}
