//! Error types for the storefront data layer
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == User-Facing Messages ==
/// Message reported when the product collection cannot be retrieved.
pub const PRODUCTS_FETCH_MESSAGE: &str = "error retrieving products";

/// Message reported when a single product cannot be retrieved.
pub const PRODUCT_FETCH_MESSAGE: &str = "error retrieving product";

/// Message reported when the remote cart rejects an addition.
pub const CART_ERROR_MESSAGE: &str = "error adding to cart";

// == Storefront Error Enum ==
/// Unified error type surfaced to callers of the catalog and cart.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Remote read failed (non-success status or transport failure)
    #[error("{0}")]
    Fetch(String),

    /// Requested product has no matching record
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Remote cart mutation failed
    #[error("{0}")]
    Cart(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StorefrontError {
    /// Fetch failure for the full product collection.
    pub fn products_unavailable() -> Self {
        Self::Fetch(PRODUCTS_FETCH_MESSAGE.to_string())
    }

    /// Fetch failure for a single product.
    pub fn product_unavailable() -> Self {
        Self::Fetch(PRODUCT_FETCH_MESSAGE.to_string())
    }

    /// Cart mutation failure.
    pub fn cart_rejected() -> Self {
        Self::Cart(CART_ERROR_MESSAGE.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match &self {
            StorefrontError::Fetch(_) => StatusCode::BAD_GATEWAY,
            StorefrontError::NotFound(_) => StatusCode::NOT_FOUND,
            StorefrontError::Cart(_) => StatusCode::BAD_GATEWAY,
            StorefrontError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Storage Error Enum ==
/// Failures raised by a key-value store backend.
///
/// These never reach callers of the cache; the cache logs and absorbs them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend cannot be used right now (poisoned lock, missing directory)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Write would exceed the configured capacity
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Filesystem failure in a persistent backend
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted file could not be decoded or encoded
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

// == Result Type Aliases ==
/// Convenience Result type for catalog and cart operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Result type for key-value store operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_is_user_facing() {
        let err = StorefrontError::products_unavailable();
        assert_eq!(err.to_string(), PRODUCTS_FETCH_MESSAGE);

        let err = StorefrontError::product_unavailable();
        assert_eq!(err.to_string(), PRODUCT_FETCH_MESSAGE);
    }

    #[test]
    fn test_cart_error_message_is_user_facing() {
        let err = StorefrontError::cart_rejected();
        assert_eq!(err.to_string(), CART_ERROR_MESSAGE);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StorefrontError::products_unavailable(), StatusCode::BAD_GATEWAY),
            (StorefrontError::NotFound("9".into()), StatusCode::NOT_FOUND),
            (StorefrontError::cart_rejected(), StatusCode::BAD_GATEWAY),
            (
                StorefrontError::InvalidRequest("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StorefrontError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_quota_error_display() {
        let err = StorageError::QuotaExceeded {
            needed: 12,
            quota: 10,
        };
        assert!(err.to_string().contains("12 bytes needed"));
    }
}
