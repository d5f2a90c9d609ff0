use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ClientError;

/// Default transport timeout when `APP_HTTP_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Directory for the persisted session files; in-memory session when unset
    pub session_dir: Option<PathBuf>,
    /// Transport-level request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a configuration from environment variables.
    ///
    /// `APP_API_BASE_URL` is required. `APP_SESSION_DIR` and
    /// `APP_HTTP_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = must_var("APP_API_BASE_URL")?;
        let session_dir = env::var("APP_SESSION_DIR").ok().map(PathBuf::from);
        let timeout = timeout_from_env()?;

        Ok(Self {
            base_url,
            session_dir,
            timeout,
        })
    }

    /// Create a test configuration pointing at the given base URL
    pub fn for_tests(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_dir: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Get required environment variable or return a config error
fn must_var(name: &str) -> Result<String, ClientError> {
    env::var(name)
        .map_err(|_| ClientError::config(format!("Missing required environment variable: {name}")))
}

fn timeout_from_env() -> Result<Duration, ClientError> {
    match env::var("APP_HTTP_TIMEOUT_SECS") {
        Ok(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                ClientError::config(format!(
                    "APP_HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(DEFAULT_TIMEOUT),
    }
}
