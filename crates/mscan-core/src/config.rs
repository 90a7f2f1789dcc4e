use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Primary mirror: GitHub API for branch lookups plus codeload for archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryMirrorConfig {
    /// API host queried for `/repos/<repository>/branches/<id>`.
    pub api_base: String,
    /// Host serving `/<repository>/zip/refs/heads/<id>` archives.
    pub download_base: String,
    /// `owner/name` of the manifest repository.
    pub repository: String,
}

impl Default for PrimaryMirrorConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            download_base: "https://codeload.github.com".to_string(),
            repository: "SteamAutoCracks/ManifestHub".to_string(),
        }
    }
}

/// Secondary mirror: object-storage bucket holding `<id>.zip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryMirrorConfig {
    pub bucket_base: String,
}

impl Default for SecondaryMirrorConfig {
    fn default() -> Self {
        Self {
            bucket_base: "https://steamgames554.s3.us-east-1.amazonaws.com".to_string(),
        }
    }
}

/// Store artwork candidates, tried in order. `{id}` is replaced by the app ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    pub sources: Vec<String>,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                "https://cdn.cloudflare.steamstatic.com/steam/apps/{id}/header.jpg".to_string(),
                "https://steamcdn-a.akamaihd.net/steam/apps/{id}/header.jpg".to_string(),
                "https://steamcdn-a.akamaihd.net/steam/apps/{id}/capsule_616x353.jpg".to_string(),
            ],
        }
    }
}

/// Global configuration loaded from `~/.config/mscan/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MscanConfig {
    /// Per-call timeout for manifest lookups and artwork probes, in milliseconds.
    pub lookup_timeout_ms: u64,
    /// Timeout for the status probe, in milliseconds.
    pub status_timeout_ms: u64,
    /// App ID whose branch is used as the primary mirror liveness check.
    pub status_reference_id: u64,
    /// User-Agent sent with every request (the GitHub API rejects requests without one).
    pub user_agent: String,
    pub primary: PrimaryMirrorConfig,
    pub secondary: SecondaryMirrorConfig,
    pub artwork: ArtworkConfig,
}

impl Default for MscanConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: 7000,
            status_timeout_ms: 5000,
            status_reference_id: 431960,
            user_agent: concat!("mscan/", env!("CARGO_PKG_VERSION")).to_string(),
            primary: PrimaryMirrorConfig::default(),
            secondary: SecondaryMirrorConfig::default(),
            artwork: ArtworkConfig::default(),
        }
    }
}

impl MscanConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }

    /// Rejects values that would make every request fail in a confusing way.
    pub fn validate(&self) -> Result<()> {
        if self.lookup_timeout_ms == 0 {
            anyhow::bail!("lookup_timeout_ms must be greater than 0");
        }
        if self.status_timeout_ms == 0 {
            anyhow::bail!("status_timeout_ms must be greater than 0");
        }
        for (field, base) in [
            ("primary.api_base", &self.primary.api_base),
            ("primary.download_base", &self.primary.download_base),
            ("secondary.bucket_base", &self.secondary.bucket_base),
        ] {
            let parsed = url::Url::parse(base).with_context(|| format!("{field} is not a URL"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("{field} must be http or https, got {}", parsed.scheme());
            }
        }
        let repo = self.primary.repository.trim_matches('/');
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {}
            _ => anyhow::bail!(
                "primary.repository must look like owner/name, got {:?}",
                self.primary.repository
            ),
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<MscanConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: MscanConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
