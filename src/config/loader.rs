use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catalog-table/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catalog-table").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog URL uses an HTTP(S) scheme
    /// - Timeouts are non-zero
    /// - At least one page size is offered and none is zero
    /// - The initial page size is one of the offered sizes
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.catalog.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Catalog url '{}' must start with http:// or https://", url),
            });
        }

        if self.catalog.timeout_seconds == 0 || self.catalog.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Catalog timeouts must be greater than zero".to_string(),
            });
        }

        let sizes = &self.table.page_sizes;
        if sizes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one page size must be configured".to_string(),
            });
        }

        if sizes.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "Page sizes must be positive".to_string(),
            });
        }

        if !sizes.contains(&self.table.page_size) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Page size {} is not one of the configured page sizes {:?}",
                    self.table.page_size, sizes
                ),
            });
        }

        Ok(())
    }
}
