use tracing::debug;

use crate::auth::storage::{FileStorage, MemoryStorage, Storage};
use crate::auth::token::{Claims, RawToken};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the role cached by the post-login router.
pub const ROLE_KEY: &str = "role";

/// Single owner of the current bearer token.
///
/// Constructed once and handed by reference to every collaborator that needs
/// identity: the request authenticator, the admission guard and the role
/// router all read through this type rather than ambient global state.
pub struct Session {
    storage: Box<dyn Storage>,
}

impl Session {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Session persisted under the configured directory, or in memory when
    /// no directory is configured.
    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.session_dir {
            Some(dir) => Self::new(Box::new(FileStorage::new(dir.clone()))),
            None => Self::in_memory(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Persist the token, overwriting any prior value. No validation happens
    /// here; a stale or malformed token surfaces later at decode time.
    pub fn save(&self, token: &RawToken) -> Result<(), ClientError> {
        self.storage.put(TOKEN_KEY, token.as_str())
    }

    /// The persisted token verbatim, or `None` when not logged in.
    pub fn token(&self) -> Option<RawToken> {
        self.storage.get(TOKEN_KEY).map(RawToken::new)
    }

    /// Drop the whole session: token, cached role, everything.
    pub fn clear(&self) {
        self.storage.clear();
    }

    /// Unverified claims of the current token; `None` when there is no token
    /// or its payload cannot be read.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        let claims = Claims::decode(&token);
        if claims.is_none() {
            debug!("stored token has undecodable claims");
        }
        claims
    }

    pub fn role(&self) -> Option<String> {
        self.claims().and_then(|c| c.role)
    }

    pub fn username(&self) -> Option<String> {
        self.claims().and_then(|c| c.username)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.claims().and_then(|c| c.subject_id())
    }

    /// Cache the role string for quick reuse, side effect of role routing.
    pub fn cache_role(&self, role: &str) -> Result<(), ClientError> {
        self.storage.put(ROLE_KEY, role)
    }

    pub fn cached_role(&self) -> Option<String> {
        self.storage.get(ROLE_KEY)
    }
}
