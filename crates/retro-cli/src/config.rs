use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Parameters for the `network` simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Maximum number of retries for each retryable failure.
    pub max_attempts: u32,
    /// Fixed wait in seconds between connect retries.
    pub connect_wait_secs: u64,
    /// Additive offset in seconds for the not-ready backoff curve.
    pub backoff_offset_secs: u64,
    /// Each simulated step fails with probability 1-in-N.
    pub failure_one_in: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            connect_wait_secs: 3,
            backoff_offset_secs: 10,
            failure_one_in: 5,
        }
    }
}

/// Parameters for the `keystore` simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystoreConfig {
    /// Number of values to store.
    pub entries: u64,
    /// Maximum number of immediate retries on a key collision.
    pub max_attempts: u32,
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        Self {
            entries: 100,
            max_attempts: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/retro/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetroConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub keystore: KeystoreConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retro")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RetroConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RetroConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RetroConfig = toml::from_str(&data)?;
    Ok(cfg)
}
