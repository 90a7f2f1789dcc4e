//! Transport error type.

use super::classify::{classify_curl_error, FailureKind};

/// A single request did not produce an HTTP status.
///
/// Messages are captured as strings so the error can be cloned into results
/// and crossed over the blocking-pool boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The per-call timeout fired and the transfer was aborted.
    #[error("request to {url} timed out")]
    Timeout { url: String },
    /// DNS, connect, send or receive failure.
    #[error("could not reach {url}: {message}")]
    Connection { url: String, message: String },
    /// Any other libcurl failure (bad URL, TLS, ...).
    #[error("request to {url} failed: {message}")]
    Other { url: String, message: String },
    /// The blocking task running the request panicked or was cancelled.
    #[error("request to {url} aborted: {message}")]
    Aborted { url: String, message: String },
}

impl TransportError {
    pub fn from_curl(url: &str, e: &curl::Error) -> Self {
        let url = url.to_string();
        match classify_curl_error(e) {
            FailureKind::Timeout => TransportError::Timeout { url },
            FailureKind::Connection => TransportError::Connection {
                url,
                message: e.description().to_string(),
            },
            FailureKind::Other => TransportError::Other {
                url,
                message: e.to_string(),
            },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TransportError::Timeout { .. } => FailureKind::Timeout,
            TransportError::Connection { .. } => FailureKind::Connection,
            TransportError::Other { .. } | TransportError::Aborted { .. } => FailureKind::Other,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            TransportError::Timeout { url }
            | TransportError::Connection { url, .. }
            | TransportError::Other { url, .. }
            | TransportError::Aborted { url, .. } => url,
        }
    }
}
