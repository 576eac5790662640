//! Response DTOs for the storefront HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::{page_numbers, Page, PageLink, Product};

/// Response body for the product listing (GET /products)
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    /// Products on the requested page
    pub products: Vec<Product>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first product shown (0 when empty)
    pub start_item: usize,
    /// 1-based index of the last product shown
    pub end_item: usize,
    /// Links for a pagination control, `"..."` marks a gap
    pub pages: Vec<PageLink>,
}

impl From<Page<Product>> for ProductListResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            pages: page_numbers(page.page, page.total_pages),
            products: page.items,
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            start_item: page.start_item,
            end_item: page.end_item,
        }
    }
}

/// Response body for a product detail (GET /products/:id)
///
/// The product record is forwarded unchanged, with display helpers added.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    /// Brand and model joined
    pub title: String,
    pub in_stock: bool,
    /// Variant codes chosen automatically when only one option exists
    pub default_selection: DefaultSelection,
}

/// Preselected variant codes, `null` where the caller must choose.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSelection {
    pub color_code: Option<String>,
    pub storage_code: Option<String>,
}

impl From<Product> for ProductDetailResponse {
    fn from(product: Product) -> Self {
        let (color_code, storage_code) = product.default_selection();
        let default_selection = DefaultSelection {
            color_code: color_code.map(str::to_string),
            storage_code: storage_code.map(str::to_string),
        };

        Self {
            title: product.title(),
            in_stock: product.is_in_stock(),
            default_selection,
            product,
        }
    }
}

/// Response body for every cart endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CartCountResponse {
    /// Items in cart as tracked locally
    pub count: u64,
}

impl CartCountResponse {
    /// Creates a new CartCountResponse
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

/// Response body for clearing the cache (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Success message
    pub message: String,
    /// Number of cache entries removed
    pub removed: usize,
}

impl ClearCacheResponse {
    /// Creates a new ClearCacheResponse
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cache entries", removed),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries purged on read after their TTL
    pub expirations: u64,
    /// Number of cache writes the store rejected
    pub write_failures: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            write_failures: stats.write_failures,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
