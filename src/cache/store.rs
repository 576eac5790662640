//! Expiring Cache Module
//!
//! Time-expiring cache layered over an injected key-value store. Entries are
//! checked lazily on read; nothing sweeps the store in the background.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::entry::current_timestamp_ms;
use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, CACHE_PREFIX};
use crate::storage::KeyValueStore;

// == Expiring Cache ==
/// Best-effort cache whose faults never reach the caller.
///
/// Storage failures, serialization failures and corrupt entries all degrade
/// to a cache miss (on read) or a no-op (on write).
pub struct ExpiringCache {
    /// Backing key-value store
    store: Arc<dyn KeyValueStore>,
    /// Diagnostic counters
    stats: StatsRecorder,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates a cache over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            stats: StatsRecorder::default(),
        }
    }

    // == Set ==
    /// Stores `value` under `key` with the current timestamp.
    ///
    /// Overwrites any previous entry. Never fails: a rejected write is
    /// logged and the cache simply stays cold for that key.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let entry = CacheEntry::new(value);

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize cache entry");
                self.stats.record_write_failure();
                return;
            }
        };

        match self.store.set_item(key, &raw) {
            Ok(()) => debug!(key, bytes = raw.len(), "cache entry written"),
            Err(e) => {
                warn!(key, error = %e, "error saving to cache");
                self.stats.record_write_failure();
            }
        }
    }

    // == Get ==
    /// Retrieves the live value stored under `key`.
    ///
    /// Returns `None` when the entry is absent, expired, unreadable, or does
    /// not decode as `T`. An expired entry is removed from the store.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.stats.record_miss();
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "error reading from cache");
                self.stats.record_miss();
                return None;
            }
        };

        let entry: CacheEntry<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key, error = %e, "ignoring corrupt cache entry");
                self.stats.record_miss();
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key, age_ms = entry.age_ms(current_timestamp_ms()), "cache entry expired");
            // Only the entry that was read is purged; a concurrent fresh write survives
            match self.store.remove_if_unchanged(key, &raw) {
                Ok(true) => {}
                Ok(false) => debug!(key, "expired entry replaced before purge"),
                Err(e) => warn!(key, error = %e, "failed to purge expired cache entry"),
            }
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(value) => {
                debug!(key, "cache hit");
                self.stats.record_hit();
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "cache entry has unexpected shape");
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes the entry under `key`. Missing keys are ignored.
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            warn!(key, error = %e, "error clearing cache");
        }
    }

    // == Clear All ==
    /// Removes every entry in the cache namespace, leaving other keys alone.
    ///
    /// Returns the number of entries removed.
    pub fn clear_all(&self) -> usize {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "error clearing all cache");
                return 0;
            }
        };

        let mut removed = 0;
        for key in keys.iter().filter(|k| k.starts_with(CACHE_PREFIX)) {
            match self.store.remove_item(key) {
                Ok(()) => removed += 1,
                Err(e) => warn!(key = %key, error = %e, "error clearing cache"),
            }
        }

        debug!(removed, "cache namespace cleared");
        removed
    }

    // == Stats ==
    /// Returns current cache diagnostics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

impl std::fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}
