//! Unified path management for hauler configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/hauler/            # Config directory (platform equivalent)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

use hauler_core::error::{HaulerError, Result};

/// Unified path management for hauler.
pub struct HaulerPaths;

impl HaulerPaths {
    /// Returns the hauler configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: path to the config directory (e.g. `~/.config/hauler/`)
    /// - `Err(Config)`: the platform config directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("hauler"))
            .ok_or_else(|| HaulerError::config("cannot determine config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_the_hauler_dir() {
        if let Ok(path) = HaulerPaths::config_file() {
            assert!(path.ends_with("hauler/config.toml"));
        }
    }
}
