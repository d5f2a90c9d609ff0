use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::token::RawToken;
use crate::error::ClientError;

/// An outbound request as a plain value.
///
/// Stages never mutate a request they were handed; a stage that needs a
/// different request forwards a modified copy.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Body,
}

#[derive(Debug, Clone, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(Bytes),
    Multipart(Vec<Part>),
}

/// One part of a multipart form: a text field or an uploaded file.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.into().into_bytes()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> Self {
        Self {
            name: name.into(),
            filename: Some(filename.into()),
            content_type: Some(content_type.into()),
            data,
        }
    }
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Body::Empty,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attach a JSON body, setting the content type.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ClientError::request(format!("failed to serialize request body: {e}")))?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Body::Json(Bytes::from(bytes));
        Ok(self)
    }

    pub fn with_multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    /// A copy of this request carrying `Authorization: Bearer <token>`,
    /// replacing any prior value so the header appears exactly once.
    pub fn with_bearer(mut self, token: &RawToken) -> Result<Self, ClientError> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|_| ClientError::request("token is not a valid header value".to_string()))?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }
}

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ClientError::decode(format!("failed to parse response body: {e}")))
    }
}

/// One stage of the outbound pipeline.
///
/// A stage may inspect or replace the request, delegate via `next`, and
/// post-process the outcome on the way back out.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: Request, next: Next<'_>) -> Result<Response, ClientError>;
}

/// Terminal stage that actually performs the exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, req: Request) -> Result<Response, ClientError>;
}

/// The remainder of the pipeline, handed to each stage.
pub struct Next<'a> {
    stages: &'a [Arc<dyn Middleware>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub fn new(stages: &'a [Arc<dyn Middleware>], transport: &'a dyn Transport) -> Self {
        Self { stages, transport }
    }

    /// Run the rest of the pipeline on `req`.
    pub fn run(self, req: Request) -> BoxFuture<'a, Result<Response, ClientError>> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                let stage = Arc::clone(stage);
                let next = Next {
                    stages: rest,
                    transport: self.transport,
                };
                Box::pin(async move { stage.handle(req, next).await })
            }
            None => self.transport.execute(req),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use reqwest::Url;

    use super::{Body, Request};
    use crate::auth::token::RawToken;

    fn url() -> Url {
        Url::parse("http://localhost:8080/api/cancion/listar").unwrap()
    }

    #[test]
    fn test_with_bearer_adds_single_header() {
        let req = Request::get(url())
            .with_bearer(&RawToken::new("abc"))
            .unwrap()
            .with_bearer(&RawToken::new("def"))
            .unwrap();

        let values: Vec<_> = req.headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "Bearer def");
    }

    #[test]
    fn test_with_json_sets_content_type() {
        let req = Request::post(url())
            .with_json(&serde_json::json!({"username": "maria"}))
            .unwrap();

        assert_eq!(
            req.headers.get("content-type").unwrap(),
            "application/json"
        );
        match req.body {
            Body::Json(bytes) => {
                assert_eq!(bytes.as_ref(), br#"{"username":"maria"}"#);
            }
            _ => panic!("expected a JSON body"),
        }
    }

    #[test]
    fn test_with_bearer_rejects_control_characters() {
        let result = Request::get(url()).with_bearer(&RawToken::new("a\nb"));
        assert!(result.is_err());
    }
}
