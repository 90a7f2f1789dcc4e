//! Store artwork lookup.
//!
//! Tries a list of image URL templates in order and keeps the first one the
//! CDN confirms with a 2xx HEAD. Misses are normal and only logged.

use crate::app_id::AppId;
use crate::config::MscanConfig;
use crate::transport::{self, CurlTransport, ProbeRequest, Transport};
use std::sync::Arc;
use std::time::Duration;

/// Placeholder replaced by the app ID in artwork templates.
const ID_PLACEHOLDER: &str = "{id}";

/// Expands an artwork template for `id`.
pub fn render_template(template: &str, id: &AppId) -> String {
    template.replace(ID_PLACEHOLDER, id.as_str())
}

#[derive(Clone)]
pub struct ArtworkFinder {
    transport: Arc<dyn Transport>,
    templates: Vec<String>,
    timeout: Duration,
}

impl ArtworkFinder {
    pub fn new(transport: Arc<dyn Transport>, templates: Vec<String>, timeout: Duration) -> Self {
        Self {
            transport,
            templates,
            timeout,
        }
    }

    pub fn from_config(cfg: &MscanConfig) -> Self {
        Self::new(
            Arc::new(CurlTransport::new(cfg.user_agent.clone())),
            cfg.artwork.sources.clone(),
            cfg.lookup_timeout(),
        )
    }

    /// Candidate URLs for `id`, in the order they are tried.
    pub fn candidates(&self, id: &AppId) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| render_template(t, id))
            .collect()
    }

    /// First candidate that answers HEAD with 2xx, or `None`.
    pub async fn find_artwork(&self, id: &AppId) -> Option<String> {
        for url in self.candidates(id) {
            let request = ProbeRequest::head(url.clone(), self.timeout);
            match transport::dispatch(&self.transport, request).await {
                Ok(status) if transport::is_success(status) => return Some(url),
                Ok(status) => tracing::debug!("artwork miss {} (HTTP {})", url, status),
                Err(e) => tracing::debug!("artwork miss {}: {}", url, e),
            }
        }
        None
    }
}
