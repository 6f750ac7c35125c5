//! Cache Module
//!
//! Provides a read-through in-memory cache with TTL freshness and
//! oldest-first eviction, plus a JSON file loader built on top of it.

mod entry;
mod json;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use json::{cache_key, load_json_with_cache, read_json, LoadError};
pub use order::AgeOrder;
pub use stats::{CacheCounters, CacheStats};
pub use store::ReadCache;

// == Public Constants ==
/// Default freshness window for configuration file reads
pub const DEFAULT_TTL_MS: u64 = 5000;

/// Default maximum number of cached entries
pub const DEFAULT_CAPACITY: usize = 64;
