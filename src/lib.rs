//! Storefront Cache - data layer for a small e-commerce storefront
//!
//! Provides a time-expiring cache over a persisted key-value store, cached
//! access to a remote product catalog, and an optimistic cart counter.

pub mod api;
pub mod cache;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use cart::{CartCounter, CartUpdated};
pub use catalog::{Product, ProductCatalog};
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use remote::RemoteApi;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::spawn_cart_watcher;
