// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `<config-dir>/tdc/config.toml` and covers the
//! server endpoints and the sync tuning knobs. A missing file yields the
//! defaults; the defaults match a local development server.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "tdc";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "TDC_CONFIG_DIR";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API.
    pub api_base: String,
    /// URL of the push channel endpoint.
    pub ws_url: String,
    /// Sync client tuning.
    pub sync: SyncSettings,
}

/// Tuning for the realtime sync client and its polling fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Maximum consecutive reconnection attempts before giving up and
    /// staying in polling mode.
    pub max_retries: u32,
    /// Base reconnect delay in milliseconds; attempt N waits N times this.
    pub base_delay_ms: u64,
    /// Polling interval in seconds while no live connection exists.
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: "http://localhost:8080".to_string(),
            ws_url: "ws://localhost:8080/ws".to_string(),
            sync: SyncSettings::default(),
        }
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        SyncSettings {
            max_retries: 5,
            base_delay_ms: 2000,
            poll_interval_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from `dir/config.toml`.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write configuration to `dir/config.toml`, creating the directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        fs::write(dir.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }
}

/// Resolve the application config directory.
///
/// `TDC_CONFIG_DIR` takes precedence; otherwise the platform config dir is
/// used (e.g. `~/.config/tdc` on Linux).
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or(Error::NoConfigDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
