//! API Handlers
//!
//! HTTP request handlers for each storefront endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::ExpiringCache;
use crate::cart::CartCounter;
use crate::catalog::{filter_products, paginate, ProductCatalog};
use crate::config::Config;
use crate::error::{Result, StorefrontError};
use crate::models::{
    AddToCartRequest, CartCountResponse, ClearCacheResponse, HealthResponse, ListProductsQuery,
    ProductDetailResponse, ProductListResponse, SetCartCountRequest, StatsResponse,
};
use crate::remote::RemoteApi;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Application state shared across all handlers.
///
/// The catalog and the cart share one key-value store, as cache entries and
/// the cart counter live side by side in the same persisted namespace.
#[derive(Clone)]
pub struct AppState {
    /// Cached product access
    pub catalog: Arc<ProductCatalog>,
    /// Optimistic cart counter
    pub cart: Arc<CartCounter>,
    /// Default listing page size
    pub page_size: usize,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(catalog: ProductCatalog, cart: CartCounter, page_size: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(cart),
            page_size: page_size.max(1),
        }
    }

    /// Wires catalog and cart over one remote API and one store.
    pub fn with_store(api: RemoteApi, store: Arc<dyn KeyValueStore>, page_size: usize) -> Self {
        let cache = Arc::new(ExpiringCache::new(store.clone()));
        let catalog = ProductCatalog::new(api.clone(), cache);
        let cart = CartCounter::new(api, store);
        Self::new(catalog, cart, page_size)
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses a file-backed store when `storage_path` is set, otherwise an
    /// in-memory store that lives as long as the process.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = RemoteApi::from_config(config)?;

        let store: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => Arc::new(FileStore::open(path).map_err(|e| {
                StorefrontError::Internal(format!("failed to open {}: {}", path.display(), e))
            })?),
            None => Arc::new(MemoryStore::new()),
        };

        Ok(Self::with_store(api, store, config.page_size))
    }
}

/// Handler for GET /products
///
/// Lists products, optionally filtered by `search`, one page at a time.
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>> {
    let products = state.catalog.get_all_products().await?;

    let search = query.search.as_deref().unwrap_or_default();
    let matching = filter_products(products, search);
    let page = paginate(
        matching,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(state.page_size),
    );

    Ok(Json(page.into()))
}

/// Handler for GET /products/:id
///
/// Returns the product detail record with its display helpers.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetailResponse>> {
    if id.trim().is_empty() {
        return Err(StorefrontError::InvalidRequest(
            "Product id cannot be empty".to_string(),
        ));
    }

    let product = state.catalog.get_product_by_id(&id).await?;
    Ok(Json(product.into()))
}

/// Handler for POST /cart
///
/// Adds a configured product to the cart and returns the new local count.
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartCountResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(StorefrontError::InvalidRequest(error_msg));
    }

    let count = state
        .cart
        .add_to_cart(&req.id, &req.color_code, &req.storage_code)
        .await?;

    Ok(Json(CartCountResponse::new(count)))
}

/// Handler for GET /cart
pub async fn cart_count_handler(State(state): State<AppState>) -> Json<CartCountResponse> {
    Json(CartCountResponse::new(state.cart.get_cart_count()))
}

/// Handler for PUT /cart
///
/// Overwrites the local count (corrective reset).
pub async fn set_cart_count_handler(
    State(state): State<AppState>,
    Json(req): Json<SetCartCountRequest>,
) -> Json<CartCountResponse> {
    state.cart.set_cart_count(req.count);
    info!(count = req.count, "cart count overwritten");
    Json(CartCountResponse::new(req.count))
}

/// Handler for DELETE /cart
pub async fn clear_cart_handler(State(state): State<AppState>) -> Json<CartCountResponse> {
    state.cart.clear_cart();
    info!("cart cleared");
    Json(CartCountResponse::new(0))
}

/// Handler for DELETE /cache
///
/// Drops every cached catalog entry; the cart count is kept.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let removed = state.catalog.clear_cache();
    Json(ClearCacheResponse::new(removed))
}

/// Handler for GET /stats
///
/// Returns current cache diagnostics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.catalog.cache().stats().into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
