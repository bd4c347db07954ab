//! Configuration management for the cf client

mod api;
mod file;
pub mod serde_utils;

pub use api::ApiConfig;
pub use file::{ConfigFile, SessionSection, TargetSection};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "CF_CONFIG";

/// Get the default configuration directory
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cf")
}

/// Get the default configuration file path
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load configuration from a file
pub fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read config: {}", e)))?;

    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load the session config, treating a missing file as an empty session.
///
/// An empty session is not logged in, so the target check reports the
/// problem instead of a file-system error.
pub fn load_or_default(path: &Path) -> Result<ConfigFile, ConfigError> {
    match load_config(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            tracing::debug!("No config at {:?}, using an empty session", path);
            Ok(ConfigFile::default())
        }
        Err(e) => Err(e),
    }
}
