//! HTTP transport abstraction
//!
//! The client only needs one capability from the network: GET a URL and
//! hand back the decoded JSON body, or fail with the HTTP status. Both the
//! async (`reqwest`) and blocking (`ureq`) implementations sit behind the
//! same trait so nothing above this layer depends on the concurrency model.

mod blocking;
mod error;
mod http;

pub use blocking::BlockingTransport;
pub use error::{TransportError, TransportErrorKind};
pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default request timeout for both implementations
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs the GET request for a query URL
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<Value, TransportError> {
        (**self).get(url).await
    }
}

/// Logging wrapper for transports.
///
/// Only the URL path is logged; the query string carries the subscription key.
pub struct LoggingTransport<T> {
    inner: T,
}

impl<T: Transport> LoggingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for LoggingTransport<T> {
    async fn get(&self, url: &Url) -> Result<Value, TransportError> {
        let start = std::time::Instant::now();
        let result = self.inner.get(url).await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    path = %url.path(),
                    duration_ms = %duration.as_millis(),
                    "LUIS request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    path = %url.path(),
                    duration_ms = %duration.as_millis(),
                    status = ?e.status,
                    kind = ?e.kind,
                    error = %e.message,
                    "LUIS request failed"
                );
            }
        }

        result
    }
}
