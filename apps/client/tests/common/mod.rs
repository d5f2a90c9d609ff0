//! Shared helpers for integration tests: a scripted transport standing in
//! for the remote API, and client builders wired to it.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use client::{
    ApiClient, ClientConfig, ClientError, Notifier, Request, Response, Session, Transport,
};

/// Terminal pipeline stage that replays scripted outcomes and records every
/// request it sees.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Result<Response, ClientError>>>,
    seen: Mutex<Vec<Request>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        let response = Response {
            status: StatusCode::from_u16(status).expect("valid status code"),
            headers: HeaderMap::new(),
            body: Bytes::from(body.into()),
        };
        self.replies.lock().push_back(Ok(response));
    }

    pub fn push_error(&self, err: ClientError) {
        self.replies.lock().push_back(Err(err));
    }

    /// Every request that reached the transport, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, req: Request) -> Result<Response, ClientError> {
        self.seen.lock().push(req.clone());
        self.replies
            .lock()
            .pop_front()
            .expect("stub transport ran out of scripted replies")
    }
}

/// Shared handle to a [`StubTransport`] that can be boxed as `dyn Transport`.
/// The orphan rule forbids implementing the foreign `Transport` trait directly
/// for `Arc<StubTransport>`, so we delegate through this local newtype.
struct SharedStub(Arc<StubTransport>);

#[async_trait]
impl Transport for SharedStub {
    async fn execute(&self, req: Request) -> Result<Response, ClientError> {
        self.0.execute(req).await
    }
}

/// Standard pipeline (bearer + fault translation) over the stub.
pub fn client_with(
    stub: &Arc<StubTransport>,
    session: Arc<Session>,
    notifier: Notifier,
) -> ApiClient {
    ApiClient::with_transport(
        &ClientConfig::for_tests("http://stub.test"),
        session,
        notifier,
        Box::new(SharedStub(Arc::clone(stub))),
    )
    .expect("test client construction cannot fail")
}
