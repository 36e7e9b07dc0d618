//! Credential resolution from configuration.
//!
//! The directions API key is a secret supplied at startup, either directly in
//! the config file or through an environment variable. It never lives in
//! source and is masked whenever it is formatted.

use super::loader::ConfigError;
use super::types::DirectionsConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Environment variable that was consulted.
        env_var: String,
    },
}

impl DirectionsConfig {
    /// Resolve the API key: the direct value first, then the environment.
    ///
    /// Called on demand and not cached.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.trim().to_string()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(key.trim().to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                env_var: self.api_key_env.clone(),
            },
        }
    }

    /// Resolve the API key or fail with [`ConfigError::MissingApiKey`].
    pub fn api_key(&self) -> Result<SecureString, ConfigError> {
        match self.resolve_credential() {
            CredentialStatus::Configured(key) => Ok(key),
            CredentialStatus::Unconfigured { env_var } => Err(ConfigError::MissingApiKey { env_var }),
        }
    }
}
