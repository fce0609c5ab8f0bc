//! Inventory client configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use url::Url;

/// Environment variable holding the storefront API origin.
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";

/// Origin used when [`API_URL_VAR`] is not set (local dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the inventory endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Absolute http(s) origin, optionally with a path prefix, no trailing slash.
    base_url: String,
}

impl InventoryConfig {
    /// Validate and normalize a base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();

        let parsed = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidValue(format!("{API_URL_VAR}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue(format!(
                "{API_URL_VAR}: unsupported scheme `{}`",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidValue(format!(
                "{API_URL_VAR}: must not carry a query or fragment"
            )));
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_VAR) {
            Some(value) if !value.trim().is_empty() => Self::new(value),
            _ => {
                tracing::debug!("{API_URL_VAR} not set; using {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
