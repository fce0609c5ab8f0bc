//! Payment SDK handle exposed to the page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings the page initialized its payment SDK with.
///
/// Deserializes from the camelCase object a page embeds. Unknown fields are
/// rejected so typos surface at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentSdk {
    /// Publishable (client-side) key, e.g. `pk_test_...`.
    pub public_key: String,
    /// Pinned API version, when the integration pins one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Locale for SDK-rendered UI (`auto`, `en`, `de`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Connected account the page acts on behalf of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentConfigError {
    #[error("payment public key is empty")]
    EmptyPublicKey,
    #[error("invalid payment SDK settings: {0}")]
    Invalid(String),
}

impl PaymentSdk {
    pub fn new(public_key: impl Into<String>) -> Result<Self, PaymentConfigError> {
        let public_key = public_key.into();
        if public_key.trim().is_empty() {
            return Err(PaymentConfigError::EmptyPublicKey);
        }
        Ok(Self {
            public_key,
            api_version: None,
            locale: None,
            account_id: None,
        })
    }

    /// Parse the embedded settings object.
    pub fn from_json(raw: &str) -> Result<Self, PaymentConfigError> {
        let sdk: Self =
            serde_json::from_str(raw).map_err(|e| PaymentConfigError::Invalid(e.to_string()))?;
        if sdk.public_key.trim().is_empty() {
            return Err(PaymentConfigError::EmptyPublicKey);
        }
        Ok(sdk)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Whether the key targets the provider's test mode.
    pub fn is_test_mode(&self) -> bool {
        self.public_key.starts_with("pk_test_")
    }
}
