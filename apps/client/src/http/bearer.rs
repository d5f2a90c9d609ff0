use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::session::Session;
use crate::error::ClientError;
use crate::http::middleware::{Middleware, Next, Request, Response};

/// Attaches the current bearer token to every outbound request.
///
/// When the session holds no token the request passes through untouched and
/// the backend decides what an unauthenticated call gets. There is no retry
/// and no refresh flow; a stale token surfaces at response time.
pub struct BearerAuth {
    session: Arc<Session>,
}

impl BearerAuth {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn handle(&self, req: Request, next: Next<'_>) -> Result<Response, ClientError> {
        match self.session.token() {
            Some(token) => next.run(req.with_bearer(&token)?).await,
            None => next.run(req).await,
        }
    }
}
