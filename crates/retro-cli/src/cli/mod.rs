//! CLI for the retro retry demos.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config;
use commands::{run_keystore, run_network};

/// Top-level CLI for the retro demos.
#[derive(Debug, Parser)]
#[command(name = "retro")]
#[command(about = "Retro: policy-driven retries for fallible operations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Simulate calls against a flaky network service, retrying per policy.
    Network,

    /// Store values under random keys, retrying immediately on collisions.
    Keystore {
        /// Number of values to store (overrides the config file).
        #[arg(long, value_name = "N")]
        entries: Option<u64>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        match cli.command {
            CliCommand::Network => run_network(&cfg.network),
            CliCommand::Keystore { entries } => {
                let mut keystore = cfg.keystore.clone();
                if let Some(n) = entries {
                    keystore.entries = n;
                }
                run_keystore(&keystore)
            }
        }
    }
}

#[cfg(test)]
mod tests;
