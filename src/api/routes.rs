//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_to_cart_handler, cart_count_handler, clear_cache_handler, clear_cart_handler,
    get_product_handler, health_handler, list_products_handler, set_cart_count_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - Search and paginate the catalog
/// - `GET /products/:id` - Product detail
/// - `POST /cart` - Add a configured product to the cart
/// - `GET /cart` - Current cart count
/// - `PUT /cart` - Overwrite the cart count
/// - `DELETE /cart` - Clear the cart count
/// - `DELETE /cache` - Drop every cached catalog entry
/// - `GET /stats` - Cache diagnostics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so browser views on other ports can call in
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/:id", get(get_product_handler))
        .route(
            "/cart",
            get(cart_count_handler)
                .post(add_to_cart_handler)
                .put(set_cart_count_handler)
                .delete(clear_cart_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
