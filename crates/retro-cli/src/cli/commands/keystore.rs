//! `retro keystore` – store values under random unique keys, retrying
//! collisions immediately.

use anyhow::{Context, Result};
use retro_core::{run_with_retry, Error, RetryableError};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use crate::config::KeystoreConfig;

pub fn run_keystore(cfg: &KeystoreConfig) -> Result<()> {
    let mut data = HashMap::new();

    for value in 0..cfg.entries {
        run_with_retry(|| store_value(&mut data, value, cfg.max_attempts))
            .with_context(|| format!("failed to store {value}"))?;
    }

    println!("Stored {} values under unique keys", data.len());
    Ok(())
}

/// Insert `value` under a fresh random key. A collision is retryable with
/// no wait: another try costs nothing but a new key draw.
fn store_value(
    data: &mut HashMap<String, u64>,
    value: u64,
    max_attempts: u32,
) -> Result<(), Error> {
    let key = Uuid::new_v4().to_string();
    if data.contains_key(&key) {
        return Err(RetryableError::fixed("error: key exists", max_attempts, Duration::ZERO).into());
    }
    data.insert(key, value);
    Ok(())
}
