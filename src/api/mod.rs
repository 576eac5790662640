//! API Module
//!
//! HTTP handlers and routing for the local storefront API.
//!
//! # Endpoints
//! - `GET /products` - Search and paginate the catalog
//! - `GET /products/:id` - Product detail
//! - `GET|POST|PUT|DELETE /cart` - Cart counter
//! - `DELETE /cache` - Clear cached catalog data
//! - `GET /stats` - Cache diagnostics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
