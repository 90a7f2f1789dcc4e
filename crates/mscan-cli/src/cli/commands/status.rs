//! `mscan status` – report whether the primary mirror is online.

use anyhow::Result;
use mscan_core::config::MscanConfig;
use mscan_core::StatusProber;

use crate::cli::readout;
use crate::cli::{EXIT_FAILURE, EXIT_OK};

pub async fn run_status(cfg: &MscanConfig, json: bool) -> Result<i32> {
    let status = StatusProber::from_config(cfg).probe_status().await;
    if json {
        println!("{}", serde_json::json!({ "status": status }));
    } else {
        println!("{}", readout::status_line(status));
    }
    Ok(if status.is_online() { EXIT_OK } else { EXIT_FAILURE })
}
