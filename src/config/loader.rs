use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::AppConfig;
use crate::storage::FileStorage;

/// Largest accepted `viewport.cell_width`, in pixels per column.
pub const MAX_CELL_WIDTH: u32 = 64;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/qa-header/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("qa-header").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The compact breakpoint is non-zero
    /// - The cell width is between 1 and [`MAX_CELL_WIDTH`]
    /// - The login route is an absolute path
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.compact_breakpoint == 0 {
            return Err(ConfigError::ValidationError {
                message: "viewport.compact_breakpoint must be greater than 0".to_string(),
            });
        }

        if !(1..=MAX_CELL_WIDTH).contains(&self.viewport.cell_width) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "viewport.cell_width must be between 1 and {}",
                    MAX_CELL_WIDTH
                ),
            });
        }

        if !self.routes.login.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "routes.login '{}' must start with '/'",
                    self.routes.login
                ),
            });
        }

        Ok(())
    }

    /// Storage file to use: the configured path or the platform default.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(FileStorage::default_path)
    }
}
