use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::geo::GeoPoint;

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

    #[error("No directions API key: set directions.api_key or the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/officeroute/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("officeroute").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
    /// - The directions base URL is an http(s) URL
    /// - The routing profile is not empty
    /// - The poll interval is positive
    /// - A configured fixed position is a valid point
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.directions.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("directions.base_url '{}' is not an http(s) URL", base_url),
            });
        }

        if self.directions.profile.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "directions.profile must not be empty".to_string(),
            });
        }

        if self.location.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "location.poll_interval_ms must be greater than zero".to_string(),
            });
        }

        if let Some(pair) = self.location.fixed_position {
            GeoPoint::from_lon_lat(pair).map_err(|e| ConfigError::ValidationError {
                message: format!("location.fixed_position: {}", e),
            })?;
        }

        Ok(())
    }
}
