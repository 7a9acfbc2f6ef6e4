mod common;

use seq_shortener::error::AppError;
use std::collections::HashSet;
use tokio::task::JoinHandle;

async fn join_all<T>(handles: Vec<JoinHandle<T>>) -> Vec<T> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results
}

#[tokio::test]
async fn test_worked_example() {
    let shortener = common::create_memory_shortener();
    let service = &shortener.service;

    let first = service
        .register_or_fetch("https://example.com")
        .await
        .unwrap();
    assert_eq!(first.original_url, "https://example.com");
    assert_eq!(first.short_url, 1);

    let second = service
        .register_or_fetch("https://rust-lang.org")
        .await
        .unwrap();
    assert_eq!(second.short_url, 2);

    let resolved = service.resolve(1).await.unwrap();
    assert_eq!(resolved.original_url, "https://example.com");

    let missing = service.resolve(99).await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_idempotent_registration() {
    let shortener = common::create_memory_shortener();

    let first = shortener
        .service
        .register_or_fetch("https://example.com/a")
        .await
        .unwrap();
    let second = shortener
        .service
        .register_or_fetch("https://example.com/a")
        .await
        .unwrap();

    assert_eq!(first.short_url, second.short_url);
    assert_eq!(shortener.store.all().len(), 1);
    assert_eq!(shortener.service.current_sequence().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_of_same_url() {
    const CALLERS: usize = 32;

    let shortener = common::create_memory_shortener();

    let handles = (0..CALLERS)
        .map(|_| {
            let service = shortener.service.clone();
            tokio::spawn(async move { service.register_or_fetch("https://race.example.com").await })
        })
        .collect();

    let results = join_all(handles).await;

    let stored = shortener.store.all();
    assert_eq!(stored.len(), 1);
    let winner = stored[0].short_url;

    for result in results {
        assert_eq!(result.unwrap().short_url, winner);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_of_distinct_urls() {
    const CALLERS: usize = 50;

    let shortener = common::create_memory_shortener();

    let handles = (0..CALLERS)
        .map(|i| {
            let service = shortener.service.clone();
            tokio::spawn(async move {
                service
                    .register_or_fetch(&format!("https://example.com/{i}"))
                    .await
            })
        })
        .collect();

    let ids: HashSet<i64> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap().short_url)
        .collect();

    assert_eq!(ids.len(), CALLERS);

    let stored = shortener.store.all();
    assert_eq!(stored.len(), CALLERS);
    let urls: HashSet<&str> = stored.iter().map(|m| m.original_url.as_str()).collect();
    assert_eq!(urls.len(), CALLERS);
}

#[tokio::test]
async fn test_id_collision_skips_to_next_value() {
    let shortener = common::create_memory_shortener();

    // Occupies id 1 without advancing the counter.
    shortener.store.preload("https://preloaded.example.com", 1);

    let mapping = shortener
        .service
        .register_or_fetch("https://example.com")
        .await
        .unwrap();

    assert_eq!(mapping.short_url, 2);
    assert_eq!(shortener.store.all().len(), 2);
}
