use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart;
use reqwest::Url;
use serde::Serialize;

use crate::auth::session::Session;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::bearer::BearerAuth;
use crate::http::fault::FaultTranslator;
use crate::http::middleware::{Body, Middleware, Next, Part, Request, Response, Transport};
use crate::notify::Notifier;

/// Terminal pipeline stage backed by a shared `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP transport: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, req: Request) -> Result<Response, ClientError> {
        let mut builder = self
            .client
            .request(req.method, req.url)
            .headers(req.headers);

        builder = match req.body {
            Body::Empty => builder,
            Body::Json(bytes) => builder.body(bytes),
            Body::Multipart(parts) => {
                let mut form = multipart::Form::new();
                for part in parts {
                    let mut piece = multipart::Part::bytes(part.data.to_vec());
                    if let Some(filename) = part.filename {
                        piece = piece.file_name(filename);
                    }
                    if let Some(content_type) = &part.content_type {
                        piece = piece.mime_str(content_type)?;
                    }
                    form = form.part(part.name, piece);
                }
                builder.multipart(form)
            }
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Entry point for every remote call.
///
/// The middleware pipeline is composed once here, in order: bearer
/// authentication, fault translation, transport. Each call runs the whole
/// chain; no call site talks to the transport directly.
pub struct ApiClient {
    base_url: Url,
    stages: Vec<Arc<dyn Middleware>>,
    transport: Box<dyn Transport>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<Session>,
        notifier: Notifier,
    ) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, session, notifier, Box::new(transport))
    }

    /// Compose the standard pipeline over an arbitrary terminal stage.
    pub fn with_transport(
        config: &ClientConfig,
        session: Arc<Session>,
        notifier: Notifier,
        transport: Box<dyn Transport>,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::config(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        let stages: Vec<Arc<dyn Middleware>> = vec![
            Arc::new(BearerAuth::new(session)),
            Arc::new(FaultTranslator::new(notifier)),
        ];

        Ok(Self {
            base_url,
            stages,
            transport,
        })
    }

    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::request(format!("invalid request path '{path}': {e}")))
    }

    pub fn url_with(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self.url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Run a request through the full pipeline.
    pub async fn execute(&self, req: Request) -> Result<Response, ClientError> {
        Next::new(&self.stages, self.transport.as_ref())
            .run(req)
            .await
    }

    pub async fn get(&self, path: &str) -> Result<Response, ClientError> {
        self.execute(Request::get(self.url(path)?)).await
    }

    pub async fn get_with(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Response, ClientError> {
        self.execute(Request::get(self.url_with(path, params)?))
            .await
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ClientError> {
        Ok(self.get(path).await?.body)
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ClientError> {
        self.execute(Request::post(self.url(path)?).with_json(body)?)
            .await
    }

    /// POST with an empty JSON object body.
    pub async fn post_empty(&self, path: &str) -> Result<Response, ClientError> {
        self.post_json(path, &serde_json::json!({})).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<Part>,
    ) -> Result<Response, ClientError> {
        self.execute(Request::post(self.url(path)?).with_multipart(parts))
            .await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ClientError> {
        self.execute(Request::put(self.url(path)?).with_json(body)?)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        self.execute(Request::delete(self.url(path)?)).await
    }
}
