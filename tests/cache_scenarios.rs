//! Cache Scenario Tests
//!
//! End-to-end checks of the read cache through the public crate API.

use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use menu_cms::cache::{cache_key, load_json_with_cache, ReadCache};
use serde_json::{json, Value};
use tempfile::TempDir;

fn keys(cache_keys: Vec<String>) -> HashSet<String> {
    cache_keys.into_iter().collect()
}

#[tokio::test]
async fn test_oldest_entry_evicted_at_capacity() {
    let cache = ReadCache::new(2, Duration::from_millis(1000));

    cache.get("a", || async { Ok::<_, ()>("A") }, None).await.unwrap();
    cache.get("b", || async { Ok::<_, ()>("B") }, None).await.unwrap();
    cache.get("c", || async { Ok::<_, ()>("C") }, None).await.unwrap();

    let stats = cache.stats().await;
    let expected: HashSet<String> = ["b", "c"].iter().map(|k| k.to_string()).collect();
    assert_eq!(keys(stats.keys), expected);
}

#[tokio::test]
async fn test_stale_value_reloaded() {
    let cache = ReadCache::new(8, Duration::from_millis(100));

    let v1 = cache.get("x", || async { Ok::<_, ()>("V1") }, None).await.unwrap();
    assert_eq!(v1, "V1");

    tokio::time::sleep(Duration::from_millis(150)).await;

    let v2 = cache.get("x", || async { Ok::<_, ()>("V2") }, None).await.unwrap();
    assert_eq!(v2, "V2");
}

#[tokio::test]
async fn test_failed_load_does_not_block_next_load() {
    let cache: ReadCache<String> = ReadCache::new(8, Duration::from_secs(60));

    let err = cache
        .get(
            "f",
            || async { Err::<String, _>(io::Error::new(io::ErrorKind::Other, "unreadable")) },
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "unreadable");

    let calls = AtomicUsize::new(0);
    let value = cache
        .get(
            "f",
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, io::Error>("loaded".to_string()) }
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(value, "loaded");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_write_through_invalidation_of_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{"version": 1}"#).unwrap();

    let cache: ReadCache<Value> = ReadCache::new(8, Duration::from_secs(60));

    let v1 = load_json_with_cache(&cache, &path, None).await.unwrap();
    assert_eq!(v1, json!({"version": 1}));

    // Writer persists new content then invalidates the entry
    std::fs::write(&path, r#"{"version": 2}"#).unwrap();
    cache.invalidate(&cache_key(&path)).await;

    let v2 = load_json_with_cache(&cache, &path, None).await.unwrap();
    assert_eq!(v2, json!({"version": 2}));
}
