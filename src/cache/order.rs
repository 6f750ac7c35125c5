//! Age Order Module
//!
//! Tracks keys by load time for oldest-first eviction.

use std::collections::VecDeque;

// == Age Order ==
/// Keeps cached keys sorted by the instant they were last stored.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest load
/// - Back = Newest load
///
/// Every store stamps the entry with the current instant, so pushing the key
/// to the back on each store keeps the queue sorted by `stored_at`. Reads do
/// not reorder keys.
#[derive(Debug, Default)]
pub struct AgeOrder {
    /// Keys ordered by load time
    order: VecDeque<String>,
}

impl AgeOrder {
    // == Constructor ==
    /// Creates an empty age order.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Store ==
    /// Marks a key as just loaded (moves it to the back).
    pub fn record_store(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the order.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the key loaded longest ago.
    ///
    /// Among keys stored at the same instant, the one stored first wins.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Keys ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
