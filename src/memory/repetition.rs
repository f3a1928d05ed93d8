//! Bounded recency buffer of produced affirmations
//!
//! Fixed-size FIFO:
//! - Capacity 10 by default
//! - Oldest entry evicted once the buffer is full
//! - One mutex serializes append/evict/read, so concurrent affirmation
//!   calls never lose an update
//!
//! The history is a soft heuristic: a reader may briefly miss an entry
//! appended by a concurrent call.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Default number of remembered affirmations
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Anti-repetition history shared by affirmation generation
#[derive(Debug)]
pub struct RepetitionTracker {
    entries: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RepetitionTracker {
    /// Create tracker with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create tracker with custom capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append text, evicting the oldest entries beyond capacity
    pub fn record(&self, text: impl Into<String>) {
        let mut entries = self.lock();
        entries.push_back(text.into());
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Snapshot of recent texts, oldest first
    pub fn recent_texts(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// Whether any recent text contains `fragment`
    pub fn contains_fragment(&self, fragment: &str) -> bool {
        self.lock().iter().any(|recent| recent.contains(fragment))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for RepetitionTracker {
    fn default() -> Self {
        Self::new()
    }
}
