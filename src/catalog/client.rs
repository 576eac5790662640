//! Product Catalog Access
//!
//! Cache-or-fetch reads of the remote product endpoints.

use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::cache::{product_key, ExpiringCache, PRODUCTS_ALL_KEY};
use crate::catalog::Product;
use crate::error::{Result, StorefrontError};
use crate::remote::RemoteApi;

// == Product Catalog ==
/// Reads products through the expiring cache, falling back to the network.
///
/// A failed fetch is reported immediately; nothing is retried and nothing
/// is cached.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    api: RemoteApi,
    cache: Arc<ExpiringCache>,
}

impl ProductCatalog {
    /// Creates a catalog over `api`, caching into `cache`.
    pub fn new(api: RemoteApi, cache: Arc<ExpiringCache>) -> Self {
        Self { api, cache }
    }

    /// The cache backing this catalog.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    // == Get All Products ==
    /// Returns the full product collection.
    ///
    /// A cached collection is returned verbatim without touching the network.
    /// An empty collection is a valid answer.
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.get::<Vec<Product>>(PRODUCTS_ALL_KEY) {
            debug!(count = products.len(), "serving product list from cache");
            return Ok(products);
        }

        let url = self.api.products_url();
        let response = self.api.client().get(&url).send().await.map_err(|e| {
            error!(url = %url, error = %e, "product list request failed");
            StorefrontError::products_unavailable()
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = %status, "product list request rejected");
            return Err(StorefrontError::products_unavailable());
        }

        let products: Vec<Product> = response.json().await.map_err(|e| {
            error!(url = %url, error = %e, "product list body could not be decoded");
            StorefrontError::products_unavailable()
        })?;

        info!(count = products.len(), "fetched product list");
        self.cache.set(PRODUCTS_ALL_KEY, &products);
        Ok(products)
    }

    // == Get Product By Id ==
    /// Returns the detail record of product `id`.
    ///
    /// Uses the dedicated per-product endpoint and its own cache key, so
    /// detail reads never depend on the size of the collection. A 404 or a
    /// `null` body is reported as [`StorefrontError::NotFound`]. Blank and
    /// dot-segment ids are rejected before any lookup.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product> {
        if id.trim().is_empty() || id == "." || id == ".." {
            return Err(StorefrontError::InvalidRequest(format!(
                "invalid product id: {:?}",
                id
            )));
        }

        let key = product_key(id);
        if let Some(product) = self.cache.get::<Product>(&key) {
            debug!(id, "serving product from cache");
            return Ok(product);
        }

        let url = self.api.product_url(id).map_err(|e| {
            error!(id, error = %e, "product address could not be built");
            StorefrontError::product_unavailable()
        })?;
        let response = self.api.client().get(url.clone()).send().await.map_err(|e| {
            error!(url = %url, error = %e, "product request failed");
            StorefrontError::product_unavailable()
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(id, "product not found upstream");
            return Err(StorefrontError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            error!(url = %url, status = %status, "product request rejected");
            return Err(StorefrontError::product_unavailable());
        }

        let product: Option<Product> = response.json().await.map_err(|e| {
            error!(url = %url, error = %e, "product body could not be decoded");
            StorefrontError::product_unavailable()
        })?;

        let product = product.ok_or_else(|| StorefrontError::NotFound(id.to_string()))?;

        debug!(id, "fetched product");
        self.cache.set(&key, &product);
        Ok(product)
    }

    // == Clear Cache ==
    /// Drops every cached catalog entry. Returns the number removed.
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.clear_all();
        info!(removed, "catalog cache cleared");
        removed
    }
}
