//! `mscan art <id>` – print the first reachable store artwork URL.

use anyhow::{Context, Result};
use mscan_core::artwork::ArtworkFinder;
use mscan_core::config::MscanConfig;
use mscan_core::AppId;

use crate::cli::{EXIT_NOT_FOUND, EXIT_OK};

pub async fn run_art(cfg: &MscanConfig, id: &str) -> Result<i32> {
    let id = AppId::parse(id).context("enter a valid numeric App ID")?;
    match ArtworkFinder::from_config(cfg).find_artwork(&id).await {
        Some(url) => {
            println!("{}", url);
            Ok(EXIT_OK)
        }
        None => {
            println!("No artwork found for App ID {}.", id);
            Ok(EXIT_NOT_FOUND)
        }
    }
}
