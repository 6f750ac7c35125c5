//! Cache Statistics Module
//!
//! Counters for cache decisions plus the diagnostic snapshot returned by
//! `ReadCache::stats`.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Counters ==
/// Cumulative counters updated by the cache.
///
/// Atomic so that cache hits only need the shared read lock.
#[derive(Debug, Default)]
pub struct CacheCounters {
    /// Lookups served from a fresh entry
    hits: AtomicU64,
    /// Lookups that had to call the loader (absent or stale key)
    misses: AtomicU64,
    /// Entries removed to make room for a new key
    evictions: AtomicU64,
}

impl CacheCounters {
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of a cache, for diagnostics only.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// Default freshness window in milliseconds
    pub default_ttl_ms: u64,
    /// Cached keys, oldest load first
    pub keys: Vec<String>,
    /// Lookups served from cache
    pub hits: u64,
    /// Lookups that invoked the loader
    pub misses: u64,
    /// Capacity evictions
    pub evictions: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}
