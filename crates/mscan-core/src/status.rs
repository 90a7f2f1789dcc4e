//! Primary mirror liveness probe.
//!
//! One bounded request for a fixed reference app ID; 2xx means online,
//! anything else (including a timeout) means offline. No retries and no
//! polling: callers decide when to probe again.

use crate::app_id::AppId;
use crate::config::MscanConfig;
use crate::mirror::{MirrorEndpoints, GITHUB_ACCEPT};
use crate::transport::{self, CurlTransport, ProbeRequest, Transport};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Binary online/offline signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Online,
    Offline,
}

impl ProbeStatus {
    pub fn is_online(self) -> bool {
        self == ProbeStatus::Online
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Online => f.write_str("Online"),
            ProbeStatus::Offline => f.write_str("Offline"),
        }
    }
}

#[derive(Clone)]
pub struct StatusProber {
    transport: Arc<dyn Transport>,
    endpoints: MirrorEndpoints,
    reference_id: AppId,
    timeout: Duration,
}

impl StatusProber {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoints: MirrorEndpoints,
        reference_id: AppId,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            endpoints,
            reference_id,
            timeout,
        }
    }

    pub fn from_config(cfg: &MscanConfig) -> Self {
        Self::new(
            Arc::new(CurlTransport::new(cfg.user_agent.clone())),
            MirrorEndpoints::from_config(cfg),
            AppId::from(cfg.status_reference_id),
            cfg.status_timeout(),
        )
    }

    pub async fn probe_status(&self) -> ProbeStatus {
        let request = ProbeRequest::get(
            self.endpoints.primary_branch_url(&self.reference_id),
            self.timeout,
        )
        .with_header("Accept", GITHUB_ACCEPT);

        let status = match transport::dispatch(&self.transport, request).await {
            Ok(code) if transport::is_success(code) => ProbeStatus::Online,
            Ok(code) => {
                tracing::info!("status probe got HTTP {}", code);
                ProbeStatus::Offline
            }
            Err(e) => {
                tracing::info!("status probe failed: {}", e);
                ProbeStatus::Offline
            }
        };
        tracing::debug!("primary mirror is {}", status);
        status
    }
}
