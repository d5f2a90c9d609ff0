#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod nav;
pub mod notify;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::session::Session;
pub use auth::storage::{FileStorage, MemoryStorage, Storage};
pub use auth::token::{Claims, RawToken};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::bearer::BearerAuth;
pub use http::client::{ApiClient, ReqwestTransport};
pub use http::fault::{FaultTranslator, FALLBACK_ERROR_MESSAGE};
pub use http::middleware::{Body, Middleware, Next, Part, Request, Response, Transport};
pub use nav::guard::Admission;
pub use nav::route::{Navigator, Route};
pub use notify::{Notifier, Toast, ToastKind};

// Prelude for test convenience
pub mod prelude {
    pub use super::auth::session::*;
    pub use super::auth::token::*;
    pub use super::config::*;
    pub use super::error::*;
    pub use super::http::client::*;
    pub use super::http::middleware::*;
    pub use super::nav::guard::*;
    pub use super::nav::route::*;
    pub use super::notify::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
