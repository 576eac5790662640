//! Request DTOs for the storefront HTTP API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

/// Query string for the product listing (GET /products)
///
/// # Fields
/// - `search`: Optional brand/model filter
/// - `page`: 1-based page number (default 1)
/// - `per_page`: Page size (default from configuration)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

/// Request body for adding a configured product (POST /cart)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// Product identifier
    pub id: String,
    /// Selected color variant
    pub color_code: String,
    /// Selected storage variant
    pub storage_code: String,
}

impl AddToCartRequest {
    /// Validates the request data
    ///
    /// Both variants must be chosen before anything reaches the remote cart.
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("Product id cannot be empty".to_string());
        }
        if self.color_code.trim().is_empty() || self.storage_code.trim().is_empty() {
            return Some("Select a storage and a color".to_string());
        }
        None
    }
}

/// Request body for overwriting the cart count (PUT /cart)
#[derive(Debug, Clone, Deserialize)]
pub struct SetCartCountRequest {
    pub count: u64,
}
