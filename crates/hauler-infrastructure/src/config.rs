//! Application configuration.
//!
//! Loaded from `config.toml` under the platform config directory (see
//! [`crate::paths::HaulerPaths`]); a missing file means defaults. The CLI
//! applies flag overrides on top of whatever was loaded.

use std::path::Path;

use hauler_core::error::{HaulerError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8787";

/// Which port implementations to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Seeded in-memory backend (workshop mode)
    #[default]
    Memory,
    /// JSON-over-HTTP backend
    Remote,
}

/// Connection settings for the remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the backend service
    pub base_url: String,
    /// Bearer token sent on every call, when set
    pub api_key: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub remote: RemoteConfig,
}

impl AppConfig {
    /// Loads the configuration from `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: parsed file, or defaults when the file is absent
    /// - `Err(Config)`: the file exists but could not be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(
                "[AppConfig] no config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            HaulerError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            HaulerError::config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HaulerError::config(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| HaulerError::config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, raw).map_err(|e| {
            HaulerError::config(format!("failed to write {}: {}", path.display(), e))
        })
    }
}
