//! Remote API Module
//!
//! Shared HTTP handle for the storefront's remote product and cart endpoints.
//! Status interpretation stays with the callers; this module only knows
//! addresses and how the client is built.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, StorefrontError};

/// HTTP client plus the base address of the remote API.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteApi {
    /// Creates a handle with a default client and no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a handle around an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builds the client from configuration (base URL and optional timeout).
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| StorefrontError::Internal(format!("failed to build HTTP client: {}", e)))?;

        debug!(base_url = %config.api_base_url, "remote API client ready");
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Underlying HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Base address without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` address of the full product collection.
    pub fn products_url(&self) -> String {
        format!("{}/product", self.base_url)
    }

    /// `GET` address of a single product.
    ///
    /// The id is pushed as one percent-encoded path segment, so `/`, `?` and
    /// `#` inside an id never change which resource is addressed.
    pub fn product_url(&self, id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            StorefrontError::Internal(format!("invalid API base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                StorefrontError::Internal(format!("API base URL {} cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .push("product")
            .push(id);

        Ok(url)
    }

    /// `POST` address of the cart.
    pub fn cart_url(&self) -> String {
        format!("{}/cart", self.base_url)
    }
}
