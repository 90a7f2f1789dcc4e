//! `mscan check <id>` – look up the manifest archive for an App ID.

use anyhow::{Context, Result};
use mscan_core::artwork::ArtworkFinder;
use mscan_core::config::MscanConfig;
use mscan_core::{AppId, LookupResult, ManifestLocator, ProbeStatus, StatusProber};

use crate::cli::readout;
use crate::cli::{EXIT_FAILURE, EXIT_NOT_FOUND, EXIT_OK};

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub json: bool,
    pub art: bool,
    pub status: bool,
}

pub async fn run_check(cfg: &MscanConfig, id: &str, opts: CheckOptions) -> Result<i32> {
    let id = AppId::parse(id).context("enter a valid numeric App ID")?;

    let status = if opts.status {
        Some(StatusProber::from_config(cfg).probe_status().await)
    } else {
        None
    };

    let locator = ManifestLocator::from_config(cfg);
    let result = if opts.json {
        locator.lookup_manifest(&id).await
    } else {
        if let Some(status) = status {
            println!("{}", readout::status_line(status));
        }
        scan(&locator, &id, readout::emit).await
    };

    let artwork = match (&result, opts.art) {
        (LookupResult::Found { .. }, true) => {
            ArtworkFinder::from_config(cfg).find_artwork(&id).await
        }
        _ => None,
    };

    if opts.json {
        let requested_art = opts.art.then_some(artwork.as_deref());
        let report = json_report(&result, status, requested_art)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(url) = &artwork {
        println!("[ART] {}", url);
    }

    Ok(exit_code(&result))
}

/// Runs the lookup, handing each block of readout lines to `out` as it happens.
async fn scan<F>(locator: &ManifestLocator, id: &AppId, mut out: F) -> LookupResult
where
    F: FnMut(&[String]),
{
    out(&readout::banner(id));
    let result = locator
        .lookup_manifest_with(id, |event| out(&readout::event_lines(&event)))
        .await;
    out(&readout::result_lines(id, &result));
    result
}

/// JSON output for `--json`. `status` and `artwork` keys appear only when
/// the matching flag was given; a requested but missing artwork is `null`.
fn json_report(
    result: &LookupResult,
    status: Option<ProbeStatus>,
    artwork: Option<Option<&str>>,
) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object_mut() {
        if let Some(status) = status {
            obj.insert("status".to_string(), serde_json::to_value(status)?);
        }
        if let Some(artwork) = artwork {
            obj.insert("artwork".to_string(), serde_json::json!(artwork));
        }
    }
    Ok(value)
}

fn exit_code(result: &LookupResult) -> i32 {
    match result {
        LookupResult::Found { .. } => EXIT_OK,
        LookupResult::NotFound => EXIT_NOT_FOUND,
        LookupResult::Error { .. } => EXIT_FAILURE,
    }
}
