//! HTTP transport used by the locator, status prober and artwork finder.
//!
//! A transport performs one bounded request and reports the final HTTP status.
//! The production implementation is libcurl; each request owns its own easy
//! handle, so the timeout lives and dies with that single call.

mod classify;
mod curl_transport;
mod error;
#[cfg(test)]
pub(crate) mod scripted;

pub use classify::{classify_curl_error, FailureKind};
pub use curl_transport::CurlTransport;
pub use error::TransportError;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Request method. Only the two the mirrors need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    /// Existence check; no body is transferred.
    Head,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Head => f.write_str("HEAD"),
        }
    }
}

/// One bounded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Upper bound for the whole call (connect + transfer).
    pub timeout: Duration,
}

impl ProbeRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            timeout,
        }
    }

    pub fn head(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Head,
            url: url.into(),
            headers: Vec::new(),
            timeout,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Performs a single request and returns the final HTTP status code.
///
/// Blocking; async callers go through [`dispatch`]. Non-2xx statuses are
/// returned as `Ok` so callers can tell 404 apart from other failures.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ProbeRequest) -> Result<u32, TransportError>;
}

/// True for 2xx statuses.
pub fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}

/// Runs `request` on the blocking pool and logs the outcome.
pub async fn dispatch(
    transport: &Arc<dyn Transport>,
    request: ProbeRequest,
) -> Result<u32, TransportError> {
    let transport = Arc::clone(transport);
    let method = request.method;
    let url = request.url.clone();
    let result = tokio::task::spawn_blocking(move || transport.send(&request))
        .await
        .map_err(|e| TransportError::Aborted {
            url: url.clone(),
            message: e.to_string(),
        })?;

    match &result {
        Ok(status) => tracing::debug!("{} {} -> HTTP {}", method, url, status),
        Err(e) => tracing::debug!("{} {} failed ({:?}): {}", method, url, e.kind(), e),
    }
    result
}
