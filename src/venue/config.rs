//! Configuration types for venue clients.
//!
//! These types are designed to be deserialized from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base configuration for any venue client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Venue identifier (e.g., "coinbase", "bter", "bitcurex")
    pub venue_id: String,
    /// REST API configuration
    #[serde(default)]
    pub rest: RestConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base URL for the REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    String::new()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RestConfig {
    /// Create a config for the given base URL, keeping the default timeout.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Returns the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Authentication configuration.
///
/// Secrets are kept out of Debug/log output.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API key
    pub api_key: Option<String>,
    /// API secret (shared HMAC secret)
    pub api_secret: Option<String>,
}

impl AuthConfig {
    /// Create auth config from explicit credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(api_secret.into()),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Returns None if either variable is not set.
    pub fn from_env(api_key_env: &str, api_secret_env: &str) -> Option<Self> {
        let api_key = std::env::var(api_key_env).ok()?;
        let api_secret = std::env::var(api_secret_env).ok()?;
        Some(Self::new(api_key, api_secret))
    }

    /// True if both key and secret are present.
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("api_secret", &self.api_secret.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}
