//! CLI for the mscan manifest locator.

mod commands;
mod readout;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mscan_core::config;
use std::path::PathBuf;

use commands::{run_art, run_check, run_status, CheckOptions};

/// Manifest found / mirror online.
pub const EXIT_OK: i32 = 0;
/// Invalid input, lookup error or mirror offline.
pub const EXIT_FAILURE: i32 = 1;
/// Both mirrors confirmed the manifest is absent.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Top-level CLI for the mscan manifest locator.
#[derive(Debug, Parser)]
#[command(name = "mscan")]
#[command(about = "mscan: locate manifest archives across two mirrors", long_about = None)]
pub struct Cli {
    /// Load configuration from this TOML file instead of ~/.config/mscan/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up the manifest archive for an App ID.
    Check {
        /// Numeric App ID.
        id: String,
        /// Print the lookup result as JSON instead of the readout.
        #[arg(long)]
        json: bool,
        /// Also look up store artwork when the manifest is found.
        #[arg(long)]
        art: bool,
        /// Probe the primary mirror status before the lookup.
        #[arg(long)]
        status: bool,
    },

    /// Report whether the primary mirror is online.
    Status {
        /// Print the status as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Find the first reachable store artwork URL for an App ID.
    Art {
        /// Numeric App ID.
        id: String,
    },
}

impl Cli {
    /// Parses arguments, loads config and runs the command. Returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                id,
                json,
                art,
                status,
            } => {
                run_check(
                    &cfg,
                    &id,
                    CheckOptions {
                        json,
                        art,
                        status,
                    },
                )
                .await
            }
            CliCommand::Status { json } => run_status(&cfg, json).await,
            CliCommand::Art { id } => run_art(&cfg, &id).await,
        }
    }
}

#[cfg(test)]
mod tests;
