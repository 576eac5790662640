//! Storage Module
//!
//! Key-value persistence shared by the expiring cache and the cart counter.
//! Callers hold an injected `Arc<dyn KeyValueStore>` instead of touching a
//! global store, so tests can supply an isolated in-memory backend.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageResult;

// == Key Value Store ==
/// String-keyed, string-valued persistent store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Removes `key` only while it still holds `expected`.
    ///
    /// Returns true when the entry was removed. The check and the removal
    /// happen under one lock.
    fn remove_if_unchanged(&self, key: &str, expected: &str) -> StorageResult<bool>;

    /// Lists every key currently held.
    fn keys(&self) -> StorageResult<Vec<String>>;
}
