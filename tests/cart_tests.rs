//! Integration tests for CartCounter.
//!
//! Uses wiremock for the remote cart endpoint. The remote always answers with
//! `count: 1`, so every assertion here checks the local count instead.

use std::sync::Arc;

use serde_json::json;
use storefront_cache::cart::CART_COUNT_KEY;
use storefront_cache::error::CART_ERROR_MESSAGE;
use storefront_cache::{
    CartCounter, CartUpdated, FileStore, KeyValueStore, MemoryStore, RemoteApi, StorefrontError,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_cart_ok(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .mount(mock_server)
        .await;
}

fn create_counter(mock_server: &MockServer) -> (Arc<MemoryStore>, CartCounter) {
    let store = Arc::new(MemoryStore::new());
    let counter = CartCounter::new(
        RemoteApi::new(format!("{}/api", mock_server.uri())),
        store.clone(),
    );
    (store, counter)
}

#[tokio::test]
async fn test_add_to_cart_sends_selection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .and(body_json(json!({
            "id": "1",
            "colorCode": "black",
            "storageCode": "128GB"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "id": "1",
            "colorCode": "black",
            "storageCode": "128GB"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_, counter) = create_counter(&mock_server);

    let count = counter.add_to_cart("1", "black", "128GB").await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_add_to_cart_increments_existing_count() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let (store, counter) = create_counter(&mock_server);
    store.set_item(CART_COUNT_KEY, "5").unwrap();

    let count = counter.add_to_cart("1", "black", "128GB").await.unwrap();

    assert_eq!(count, 6);
    assert_eq!(store.get_item(CART_COUNT_KEY).unwrap().as_deref(), Some("6"));
}

#[tokio::test]
async fn test_add_to_cart_starts_at_one() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let (store, counter) = create_counter(&mock_server);

    let count = counter.add_to_cart("1", "black", "128GB").await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(store.get_item(CART_COUNT_KEY).unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn test_remote_count_is_ignored() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let (_, counter) = create_counter(&mock_server);

    for expected in 1..=3 {
        let count = counter.add_to_cart("1", "black", "128GB").await.unwrap();
        assert_eq!(count, expected);
    }
}

#[tokio::test]
async fn test_add_to_cart_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let (store, counter) = create_counter(&mock_server);
    store.set_item(CART_COUNT_KEY, "5").unwrap();
    let mut events = counter.subscribe();

    let err = counter.add_to_cart("1", "black", "128GB").await.unwrap_err();

    assert!(matches!(err, StorefrontError::Cart(_)));
    assert_eq!(err.to_string(), CART_ERROR_MESSAGE);
    assert_eq!(counter.get_cart_count(), 5);
    assert!(events.try_recv().is_err(), "failed add must not notify");
}

#[tokio::test]
async fn test_add_to_cart_with_undecodable_ack_still_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let (_, counter) = create_counter(&mock_server);

    assert_eq!(counter.add_to_cart("1", "black", "128GB").await.unwrap(), 1);
}

#[tokio::test]
async fn test_add_to_cart_notifies_subscribers() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let (_, counter) = create_counter(&mock_server);
    let mut badge = counter.subscribe();
    let mut other = counter.subscribe();

    let count = counter.add_to_cart("1", "black", "128GB").await.unwrap();

    assert_eq!(badge.recv().await.unwrap(), CartUpdated);
    assert_eq!(other.recv().await.unwrap(), CartUpdated);
    assert_eq!(counter.get_cart_count(), count);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_all_counted() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let (_, counter) = create_counter(&mock_server);
    let counter = Arc::new(counter);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let counter = counter.clone();
            tokio::spawn(async move { counter.add_to_cart("1", "black", "128GB").await })
        })
        .collect();

    let mut seen = Vec::new();
    for handle in handles {
        seen.push(handle.await.unwrap().unwrap());
    }
    seen.sort_unstable();

    assert_eq!(seen, (1..=20).collect::<Vec<u64>>());
    assert_eq!(counter.get_cart_count(), 20);
}

#[tokio::test]
async fn test_count_survives_reload_with_file_store() {
    let mock_server = MockServer::start().await;
    mount_cart_ok(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.json");
    let api = RemoteApi::new(format!("{}/api", mock_server.uri()));

    {
        let counter = CartCounter::new(api.clone(), Arc::new(FileStore::open(&path).unwrap()));
        counter.add_to_cart("1", "black", "128GB").await.unwrap();
        counter.add_to_cart("2", "white", "256GB").await.unwrap();
    }

    let reloaded = CartCounter::new(api, Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(reloaded.get_cart_count(), 2);

    reloaded.clear_cart();
    let reloaded = CartCounter::new(
        RemoteApi::new("http://127.0.0.1:9"),
        Arc::new(FileStore::open(&path).unwrap()),
    );
    assert_eq!(reloaded.get_cart_count(), 0);
}
