//! Cart Watcher Task
//!
//! Background observer of cart change notifications, the server-side
//! counterpart of a header badge.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cart::CartCounter;

/// Spawns a task that re-reads the cart count after every change notification
/// and hands it to `on_update`.
///
/// The subscription is taken before the task starts, so no change made after
/// this call is missed. A lagging watcher skips to the latest count. The task
/// ends when the counter is dropped.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cart_watcher(cart.clone(), |count| info!(count, "cart updated"));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cart_watcher<F>(cart: Arc<CartCounter>, on_update: F) -> JoinHandle<()>
where
    F: Fn(u64) + Send + 'static,
{
    let mut events = cart.subscribe();
    let cart = Arc::downgrade(&cart);

    tokio::spawn(async move {
        info!("Starting cart watcher");

        loop {
            match events.recv().await {
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "cart watcher lagged, reading latest count");
                }
                Err(RecvError::Closed) => break,
            }

            let Some(cart) = cart.upgrade() else { break };
            on_update(cart.get_cart_count());
        }

        debug!("cart watcher stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::mpsc;

    use crate::remote::RemoteApi;
    use crate::storage::MemoryStore;

    fn counter() -> Arc<CartCounter> {
        Arc::new(CartCounter::new(
            RemoteApi::new("http://127.0.0.1:9"),
            Arc::new(MemoryStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_watcher_reports_new_counts() {
        let cart = counter();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let handle = spawn_cart_watcher(cart.clone(), move |count| {
            let _ = tx.send(count);
        });

        cart.set_cart_count(3);
        let seen = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert_eq!(seen, Some(3));

        cart.clear_cart();
        let seen = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert_eq!(seen, Some(0));

        handle.abort();
    }

    #[tokio::test]
    async fn test_watcher_stops_when_counter_dropped() {
        let cart = counter();
        let handle = spawn_cart_watcher(cart.clone(), |_| {});

        drop(cart);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("watcher should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_watcher_can_be_aborted() {
        let cart = counter();
        let handle = spawn_cart_watcher(cart, |_| {});

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
