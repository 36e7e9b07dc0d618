//! Configuration loading and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, DirectionsConfig, LocationConfig};
