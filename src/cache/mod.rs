//! Cache Module
//!
//! Provides a persisted key-value cache whose entries expire a fixed time
//! after they were written.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Lifetime of every cache entry in milliseconds (1 hour)
pub const CACHE_TTL_MS: i64 = 60 * 60 * 1000;

/// Prefix shared by every key the cache owns
pub const CACHE_PREFIX: &str = "cache_";

/// Key holding the full product collection
pub const PRODUCTS_ALL_KEY: &str = "cache_products_all";

// == Key Derivation ==
/// Key holding the detail record of product `id`.
pub fn product_key(id: &str) -> String {
    format!("{}product_{}", CACHE_PREFIX, id)
}
