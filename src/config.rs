//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every field carries a serde default, so a missing or partial file
//! falls back to a usable local-development configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the remote scan service lives.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Controller timings and defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct ScannerConfig {
    /// Auto-scan cadence.
    #[serde(default = "default_auto_scan_interval_secs")]
    pub auto_scan_interval_secs: u64,
    /// How long transient failure messages stay visible.
    #[serde(default = "default_error_display_secs")]
    pub error_display_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogConfig {
    /// Emit JSON log lines instead of the human format.
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_auto_scan_interval_secs() -> u64 {
    10
}

fn default_error_display_secs() -> u64 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            auto_scan_interval_secs: default_auto_scan_interval_secs(),
            error_display_secs: default_error_display_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file; defaults if it is absent.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}
