//! Cache Entry Module
//!
//! Defines the persisted shape of a cache entry: the cached data plus the
//! time it was written.

use serde::{Deserialize, Serialize};

use crate::cache::CACHE_TTL_MS;

// == Cache Entry ==
/// A cached value tagged with its write timestamp.
///
/// Serialized as `{"data": ..., "timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value
    pub data: T,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Wraps `data` with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed between the write and `now_ms`.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.timestamp)
    }

    // == Is Expired ==
    /// Checks whether the entry is dead at `now_ms`.
    ///
    /// Boundary condition: an entry is expired only once its age is strictly
    /// greater than the TTL; an entry exactly `CACHE_TTL_MS` old is still live.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.age_ms(now_ms) > CACHE_TTL_MS
    }

    /// Checks whether the entry is dead right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
