//! Mirror identities and URL templating.
//!
//! Every URL the locator touches is derived from an `AppId` and the configured
//! bases, so tests can point both mirrors at a local server.

use crate::app_id::AppId;
use crate::config::MscanConfig;
use serde::Serialize;
use std::fmt;

/// Accept header the GitHub REST API expects.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Which mirror answered (or is being queried).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mirror {
    /// Version-control hosting API; first choice.
    Primary,
    /// Object-storage bucket; checked only after a confirmed 404 from the primary.
    Secondary,
}

impl Mirror {
    /// 1-based position in the lookup order.
    pub fn position(self) -> u8 {
        match self {
            Mirror::Primary => 1,
            Mirror::Secondary => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mirror::Primary => "Server 1",
            Mirror::Secondary => "Server 2",
        }
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base URLs for both mirrors with trailing slashes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorEndpoints {
    api_base: String,
    download_base: String,
    repository: String,
    bucket_base: String,
}

impl MirrorEndpoints {
    pub fn new(api_base: &str, download_base: &str, repository: &str, bucket_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            download_base: download_base.trim_end_matches('/').to_string(),
            repository: repository.trim_matches('/').to_string(),
            bucket_base: bucket_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &MscanConfig) -> Self {
        Self::new(
            &cfg.primary.api_base,
            &cfg.primary.download_base,
            &cfg.primary.repository,
            &cfg.secondary.bucket_base,
        )
    }

    /// `GET` target on the primary: the branch named after the app ID.
    pub fn primary_branch_url(&self, id: &AppId) -> String {
        format!("{}/repos/{}/branches/{}", self.api_base, self.repository, id)
    }

    /// Archive download URL handed out when the primary has the branch.
    pub fn primary_archive_url(&self, id: &AppId) -> String {
        format!("{}/{}/zip/refs/heads/{}", self.download_base, self.repository, id)
    }

    /// `HEAD` target on the secondary; also the download URL when it exists.
    pub fn secondary_archive_url(&self, id: &AppId) -> String {
        format!("{}/{}.zip", self.bucket_base, id)
    }
}

impl Default for MirrorEndpoints {
    fn default() -> Self {
        Self::from_config(&MscanConfig::default())
    }
}
