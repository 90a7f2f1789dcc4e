//! Manifest locator: two-mirror lookup with asymmetric fallback.
//!
//! The primary mirror is asked first. Only a definitive 404 from it moves
//! the lookup on to the secondary; any other primary failure is reported as
//! an error, so "absent" is never confused with "could not check".

mod result;

pub use result::{LookupResult, ScanEvent};

use crate::app_id::AppId;
use crate::config::MscanConfig;
use crate::mirror::{Mirror, MirrorEndpoints, GITHUB_ACCEPT};
use crate::transport::{self, CurlTransport, ProbeRequest, Transport};
use std::sync::Arc;
use std::time::Duration;

const HTTP_NOT_FOUND: u32 = 404;

/// Resolves the archive URL for an app ID.
///
/// Stateless between calls; clones share the transport.
#[derive(Clone)]
pub struct ManifestLocator {
    transport: Arc<dyn Transport>,
    endpoints: MirrorEndpoints,
    timeout: Duration,
}

impl ManifestLocator {
    pub fn new(transport: Arc<dyn Transport>, endpoints: MirrorEndpoints, timeout: Duration) -> Self {
        Self {
            transport,
            endpoints,
            timeout,
        }
    }

    /// Locator using libcurl with the configured mirrors and lookup timeout.
    pub fn from_config(cfg: &MscanConfig) -> Self {
        Self::new(
            Arc::new(CurlTransport::new(cfg.user_agent.clone())),
            MirrorEndpoints::from_config(cfg),
            cfg.lookup_timeout(),
        )
    }

    pub fn endpoints(&self) -> &MirrorEndpoints {
        &self.endpoints
    }

    pub async fn lookup_manifest(&self, id: &AppId) -> LookupResult {
        self.lookup_manifest_with(id, |_| {}).await
    }

    /// Same as [`lookup_manifest`](Self::lookup_manifest), reporting progress to `on_event`.
    pub async fn lookup_manifest_with<F>(&self, id: &AppId, mut on_event: F) -> LookupResult
    where
        F: FnMut(ScanEvent),
    {
        tracing::info!("manifest lookup for app {}", id);

        let primary = ProbeRequest::get(self.endpoints.primary_branch_url(id), self.timeout)
            .with_header("Accept", GITHUB_ACCEPT);
        on_event(ScanEvent::Querying {
            mirror: Mirror::Primary,
        });
        match transport::dispatch(&self.transport, primary).await {
            Ok(status) => {
                on_event(ScanEvent::Responded {
                    mirror: Mirror::Primary,
                    status,
                });
                if transport::is_success(status) {
                    let download_url = self.endpoints.primary_archive_url(id);
                    tracing::info!("app {} found on primary: {}", id, download_url);
                    return LookupResult::Found {
                        download_url,
                        mirror: Mirror::Primary,
                    };
                }
                if status != HTTP_NOT_FOUND {
                    tracing::warn!("primary returned HTTP {} for app {}", status, id);
                    return LookupResult::Error {
                        reason: format!("registry unavailable (HTTP {})", status),
                    };
                }
            }
            Err(e) => {
                on_event(ScanEvent::Failed {
                    mirror: Mirror::Primary,
                    kind: e.kind(),
                });
                tracing::warn!("primary lookup for app {} failed: {}", id, e);
                return LookupResult::Error {
                    reason: format!("registry unavailable: {}", e),
                };
            }
        }

        let secondary_url = self.endpoints.secondary_archive_url(id);
        let secondary = ProbeRequest::head(secondary_url.clone(), self.timeout);
        on_event(ScanEvent::Querying {
            mirror: Mirror::Secondary,
        });
        match transport::dispatch(&self.transport, secondary).await {
            Ok(status) => {
                on_event(ScanEvent::Responded {
                    mirror: Mirror::Secondary,
                    status,
                });
                if transport::is_success(status) {
                    tracing::info!("app {} found on secondary: {}", id, secondary_url);
                    return LookupResult::Found {
                        download_url: secondary_url,
                        mirror: Mirror::Secondary,
                    };
                }
            }
            Err(e) => {
                on_event(ScanEvent::Failed {
                    mirror: Mirror::Secondary,
                    kind: e.kind(),
                });
                tracing::debug!("secondary check for app {} failed: {}", id, e);
            }
        }

        tracing::info!("app {} not found on either mirror", id);
        LookupResult::NotFound
    }
}
