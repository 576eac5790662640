//! Request and Response models for the storefront HTTP API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddToCartRequest, ListProductsQuery, SetCartCountRequest};
pub use responses::{
    CartCountResponse, ClearCacheResponse, DefaultSelection, ErrorResponse, HealthResponse,
    ProductDetailResponse, ProductListResponse, StatsResponse,
};
