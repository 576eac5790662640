//! Cart Counter
//!
//! Locally persisted "items in cart" count, kept in step with successful
//! remote additions.
//!
//! The remote cart endpoint acknowledges every addition with the same fixed
//! `count` no matter how many items were added before, so that value is never
//! used. After each accepted addition the locally stored count is read,
//! incremented by one and written back, and that local value is what callers
//! see. Trusting the remote count again requires the remote contract to
//! change first.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::error::{Result, StorefrontError};
use crate::remote::RemoteApi;
use crate::storage::KeyValueStore;

/// Store key holding the stringified cart count.
pub const CART_COUNT_KEY: &str = "cart_count";

/// Buffered notifications per subscriber before it starts lagging.
const EVENT_CAPACITY: usize = 16;

// == Cart Updated Event ==
/// Payload-free notice that the cart count changed.
///
/// Subscribers re-read [`CartCounter::get_cart_count`] on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpdated;

// == Wire Types ==
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartPayload<'a> {
    id: &'a str,
    color_code: &'a str,
    storage_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct CartAcknowledgement {
    #[serde(default)]
    count: Option<i64>,
}

// == Cart Counter ==
/// Optimistic local count of cart items.
///
/// The remote cart is told about every add, but the count shown to the user
/// is kept locally under `cart_count` and survives as long as the store does.
/// Subscribers are told whenever it changes.
pub struct CartCounter {
    api: RemoteApi,
    store: Arc<dyn KeyValueStore>,
    events: broadcast::Sender<CartUpdated>,
    /// Serializes the local read-increment-write within this process
    increment: Mutex<()>,
}

impl CartCounter {
    /// Creates a counter persisting into `store`.
    pub fn new(api: RemoteApi, store: Arc<dyn KeyValueStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            store,
            events,
            increment: Mutex::new(()),
        }
    }

    /// Subscribes to cart change notifications.
    ///
    /// Only changes made after this call are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<CartUpdated> {
        self.events.subscribe()
    }

    // == Add To Cart ==
    /// Adds one configured product to the remote cart and returns the new
    /// local count.
    ///
    /// On a rejected or failed request the persisted count is left untouched
    /// and [`StorefrontError::Cart`] is returned.
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        color_code: &str,
        storage_code: &str,
    ) -> Result<u64> {
        let url = self.api.cart_url();
        let payload = CartPayload {
            id: product_id,
            color_code,
            storage_code,
        };

        let response = self
            .api
            .client()
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "add to cart request failed");
                StorefrontError::cart_rejected()
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = %status, product_id, "add to cart rejected");
            return Err(StorefrontError::cart_rejected());
        }

        match response.json::<CartAcknowledgement>().await {
            Ok(ack) => debug!(remote_count = ?ack.count, "ignoring remote cart count"),
            Err(e) => debug!(error = %e, "cart acknowledgement not decodable"),
        }

        let count = {
            let _guard = self.increment.lock().unwrap_or_else(PoisonError::into_inner);
            let next = self.get_cart_count().saturating_add(1);
            self.persist(next);
            next
        };

        info!(product_id, color_code, storage_code, count, "added to cart");
        self.notify();
        Ok(count)
    }

    // == Get Cart Count ==
    /// Returns the persisted count, 0 when absent or unreadable.
    pub fn get_cart_count(&self) -> u64 {
        match self.store.get_item(CART_COUNT_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring malformed cart count");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "error reading cart count");
                0
            }
        }
    }

    // == Set Cart Count ==
    /// Overwrites the persisted count.
    pub fn set_cart_count(&self, count: u64) {
        {
            let _guard = self.increment.lock().unwrap_or_else(PoisonError::into_inner);
            self.persist(count);
        }
        self.notify();
    }

    // == Clear Cart ==
    /// Removes the persisted count; the next read returns 0.
    pub fn clear_cart(&self) {
        {
            let _guard = self.increment.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = self.store.remove_item(CART_COUNT_KEY) {
                warn!(error = %e, "error clearing cart count");
            }
        }
        self.notify();
    }

    fn persist(&self, count: u64) {
        if let Err(e) = self.store.set_item(CART_COUNT_KEY, &count.to_string()) {
            warn!(count, error = %e, "error saving cart count");
        }
    }

    fn notify(&self) {
        // No subscribers is fine
        let receivers = self.events.send(CartUpdated).unwrap_or(0);
        debug!(receivers, "cart update broadcast");
    }
}

impl std::fmt::Debug for CartCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartCounter")
            .field("api", &self.api)
            .field("subscribers", &self.events.receiver_count())
            .finish_non_exhaustive()
    }
}
