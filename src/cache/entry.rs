//! Cache Entry Module
//!
//! Defines a single cached value together with the instant it was loaded.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A loaded value and its load timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached payload
    pub value: V,
    /// Monotonic instant at which the value was stored
    pub stored_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the value was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served for the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale, so a
    /// value is never served once the full TTL has elapsed.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}
