//! Read Cache Module
//!
//! Read-through cache combining HashMap storage with load-time ordering and
//! TTL-based freshness checks.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{AgeOrder, CacheCounters, CacheEntry, CacheStats};

// == Cache State ==
/// Mutable state guarded by the cache lock.
#[derive(Debug)]
struct CacheState<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys ordered by load time
    order: AgeOrder,
    /// Bumped by every invalidation and clear
    epoch: u64,
}

impl<V> CacheState<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: AgeOrder::new(),
            epoch: 0,
        }
    }

    fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.remove(key);
        }
        removed
    }
}

// == Read Cache ==
/// Bounded-freshness read-through cache.
///
/// Values are produced by a caller-supplied loader on miss or when the stored
/// value is older than the TTL. The map never holds more than `capacity`
/// entries; when a new key arrives at capacity, the entry loaded longest ago
/// is evicted.
///
/// The lock is never held while a loader runs, so concurrent lookups of the
/// same stale key may each invoke their loader. The last completed load wins.
/// A load that was started before an invalidation or clear is returned to its
/// caller but not stored.
#[derive(Debug)]
pub struct ReadCache<V> {
    state: RwLock<CacheState<V>>,
    /// Hit/miss/eviction counters, outside the lock
    counters: CacheCounters,
    /// Maximum number of entries
    capacity: usize,
    /// Freshness window used when a lookup does not override it
    default_ttl: Duration,
}

impl<V: Clone> ReadCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries (clamped to at least 1)
    /// * `default_ttl` - Freshness window for lookups without an explicit TTL
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        let capacity = if capacity == 0 {
            warn!("Cache capacity of 0 requested, using 1");
            1
        } else {
            capacity
        };

        Self {
            state: RwLock::new(CacheState::new()),
            counters: CacheCounters::default(),
            capacity,
            default_ttl,
        }
    }

    // == Get ==
    /// Returns the cached value for `key`, loading it when absent or stale.
    ///
    /// The loader runs at most once per call and only when no fresh entry
    /// exists. A loader error is returned unchanged and leaves the map as it
    /// was, including any stale entry for the same key.
    ///
    /// # Arguments
    /// * `key` - Identifier of the underlying resource, e.g. a file path
    /// * `loader` - Produces the value on miss
    /// * `ttl` - Freshness override (uses the default TTL if None)
    pub async fn get<F, Fut, E>(&self, key: &str, loader: F, ttl: Option<Duration>) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let ttl = ttl.unwrap_or(self.default_ttl);

        let epoch = {
            let state = self.state.read().await;
            if let Some(entry) = state.entries.get(key) {
                if entry.is_fresh(ttl) {
                    self.counters.record_hit();
                    debug!(key, "Cache hit");
                    return Ok(entry.value.clone());
                }
                debug!(key, age_ms = entry.age().as_millis() as u64, "Cache entry stale");
            }
            self.counters.record_miss();
            state.epoch
        };

        let value = match loader().await {
            Ok(value) => value,
            Err(err) => {
                debug!(key, "Cache load failed, entry left untouched");
                return Err(err);
            }
        };

        self.store(key, value.clone(), epoch).await;
        Ok(value)
    }

    // == Store ==
    /// Inserts or replaces an entry, evicting the oldest one if a new key
    /// would exceed capacity.
    ///
    /// Skipped when the cache was invalidated or cleared since `epoch`, since
    /// the value may predate a write to the underlying resource.
    async fn store(&self, key: &str, value: V, epoch: u64) {
        let mut state = self.state.write().await;

        if state.epoch != epoch {
            debug!(key, "Cache invalidated during load, result not stored");
            return;
        }

        if !state.entries.contains_key(key) && state.entries.len() >= self.capacity {
            if let Some(evicted) = state.order.pop_oldest() {
                state.entries.remove(&evicted);
                self.counters.record_eviction();
                debug!(key = %evicted, "Evicted oldest cache entry");
            }
        }

        state.entries.insert(key.to_string(), CacheEntry::new(value));
        state.order.record_store(key);
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Absent keys are ignored.
    pub async fn invalidate(&self, key: &str) {
        let mut state = self.state.write().await;
        state.epoch += 1;
        if state.remove(key) {
            debug!(key, "Cache entry invalidated");
        }
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        let removed = state.entries.len();
        state.epoch += 1;
        state.entries.clear();
        state.order.clear();
        debug!(removed, "Cache cleared");
    }

    // == Stats ==
    /// Returns a diagnostic snapshot of the cache.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        CacheStats {
            size: state.entries.len(),
            capacity: self.capacity,
            default_ttl_ms: self.default_ttl.as_millis() as u64,
            keys: state.order.iter().cloned().collect(),
            hits: self.counters.hits(),
            misses: self.counters.misses(),
            evictions: self.counters.evictions(),
            hit_rate: self.counters.hit_rate(),
        }
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Freshness window used when a lookup does not override it.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
