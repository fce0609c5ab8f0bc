//! HTTP implementation of [`InventoryLookup`].

use storefront_core::{InventoryResult, ProductId};

use crate::config::{ConfigError, InventoryConfig};
use crate::dto::InventoryResponse;
use crate::encode::encode_query_component;
use crate::error::LookupError;
use crate::lookup::InventoryLookup;

/// Path of the inventory endpoint, relative to the configured base URL.
pub const INVENTORY_PATH: &str = "/api/inventory";

/// Query parameter carrying the product identifier.
pub const PRODUCT_PARAM: &str = "product";

/// Client for the storefront inventory endpoint.
///
/// One `GET` per lookup. No retry, no caching, no timeout beyond what the
/// underlying `reqwest::Client` applies. Cloning is cheap and shares the
/// connection pool.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    base_url: String,
    http: reqwest::Client,
}

impl InventoryClient {
    pub fn new(config: InventoryConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS roots, timeouts).
    pub fn with_http_client(config: InventoryConfig, http: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            http,
        }
    }

    /// Build a client from `STOREFRONT_API_URL` (or the local default).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(InventoryConfig::load()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a product, with the identifier percent-encoded.
    pub fn endpoint_url(&self, product: &ProductId) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url,
            INVENTORY_PATH,
            PRODUCT_PARAM,
            encode_query_component(product.as_str())
        )
    }

    /// Look up the available unit count for `product`.
    ///
    /// Never fails. Any problem is logged once at WARN and reported as
    /// [`InventoryResult::Unavailable`].
    pub async fn lookup_inventory(&self, product: &ProductId) -> InventoryResult {
        match self.fetch_units(product).await {
            Ok(units) => {
                tracing::debug!(product = %product, units, "inventory lookup resolved");
                InventoryResult::Units(units)
            }
            Err(err) => {
                tracing::warn!(product = %product, error = %err, "inventory lookup failed");
                InventoryResult::Unavailable
            }
        }
    }

    async fn fetch_units(&self, product: &ProductId) -> Result<u64, LookupError> {
        let url = self.endpoint_url(product);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| LookupError::Body(e.to_string()))?;

        InventoryResponse::parse_units(&body)
    }
}

#[async_trait::async_trait]
impl InventoryLookup for InventoryClient {
    async fn lookup_inventory(&self, product: &ProductId) -> InventoryResult {
        InventoryClient::lookup_inventory(self, product).await
    }
}
