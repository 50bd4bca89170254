//! Configuration for trellis text stores and the `trellis` binary.
//!
//! Stored in `~/.trellis/config.toml`. Every section is optional; missing
//! values take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub store: StoreConfig,

    /// Defaults for [`crate::TextNodeModel::from_config`].
    pub binding: BindingConfig,

    pub logging: LoggingConfig,
}

/// Where the text store snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Snapshot file; `None` means `~/.trellis/store.json`.
    pub snapshot_path: Option<PathBuf>,

    /// Pretty-print snapshots on save.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            pretty: true,
        }
    }
}

/// Binding model defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Fail to load when the node is missing.
    pub required: bool,

    /// Create missing nodes on load.
    pub create_if_absent: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            required: true,
            create_if_absent: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl TrellisConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".trellis"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Snapshot file to use: the configured one, else `~/.trellis/store.json`.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.snapshot_path {
            return Ok(path.clone());
        }
        Self::config_dir()
            .map(|d| d.join("store.json"))
            .ok_or_else(|| Error::Config("could not determine snapshot location".to_string()))
    }
}
