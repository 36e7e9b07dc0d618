use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::location::Permission;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub directions: DirectionsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Directions service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the service (e.g., "https://api.openrouteservice.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Routing profile path segment (e.g., "driving-car").
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Device location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Interval of the background origin refresh (default: 10000).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Position reported by the static provider, as `[longitude, latitude]`.
    #[serde(default)]
    pub fixed_position: Option<[f64; 2]>,
    /// Permission answer of the static provider: "granted" or "denied".
    #[serde(rename = "permission", default = "default_permission")]
    pub permission_str: String,
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dataset to load instead of the bundled one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

fn default_api_key_env() -> String {
    "ORS_API_KEY".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_timeout() -> u32 {
    30
}

fn default_poll_interval_ms() -> u64 {
    10_000
}

fn default_permission() -> String {
    "granted".to_string()
}

impl DirectionsConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }
}

impl LocationConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Parse the permission field. Anything other than "denied" grants.
    pub fn permission(&self) -> Permission {
        match self.permission_str.to_lowercase().as_str() {
            "denied" => Permission::Denied,
            _ => Permission::Granted,
        }
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
            api_key: None,
            api_key_env: default_api_key_env(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            fixed_position: None,
            permission_str: default_permission(),
        }
    }
}
