//! `retro network` – simulated flaky service: fetch a server version,
//! then ask the server to do some work.

use anyhow::{Context, Result};
use rand::Rng;
use retro_core::{run_with_retry, Error, RetryableError};
use std::time::Duration;

use crate::config::NetworkConfig;

pub fn run_network(cfg: &NetworkConfig) -> Result<()> {
    let server_id = "abc123";

    let version =
        run_with_retry(|| get_server(cfg, server_id)).context("failed to get server info")?;
    println!("Server {server_id} is at version {version}");

    run_with_retry(|| use_server(cfg, server_id, &version)).context("failed to use server")?;
    println!("Server {server_id} did some work");

    Ok(())
}

/// Fetch the server's version. Intermittent connect failures are retryable
/// with a fixed wait; a version mismatch is terminal.
fn get_server(cfg: &NetworkConfig, id: &str) -> Result<String, Error> {
    if maybe_fail(cfg.failure_one_in) {
        return Err(RetryableError::fixed(
            format!("server {id}: failed to connect"),
            cfg.max_attempts,
            Duration::from_secs(cfg.connect_wait_secs),
        )
        .into());
    }
    if maybe_fail(cfg.failure_one_in) {
        return Err(Error::terminal(format!("server {id}: invalid version")));
    }
    Ok("1".to_string())
}

/// Ask the server to do some work. A not-ready server should recover
/// after an unknown delay, so back off between attempts.
fn use_server(cfg: &NetworkConfig, id: &str, _version: &str) -> Result<(), Error> {
    if maybe_fail(cfg.failure_one_in) {
        return Err(RetryableError::backoff_with_offset(
            format!("server {id}: resource not ready"),
            cfg.max_attempts,
            Duration::from_secs(cfg.backoff_offset_secs),
        )
        .into());
    }
    Ok(())
}

fn maybe_fail(one_in: u32) -> bool {
    one_in > 0 && rand::thread_rng().gen_range(0..one_in) == 0
}
