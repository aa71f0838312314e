//! Bounded memo of finished conversions, owned by the caller.
//!
//! Keyed by (mode label, input text). When an insert finds the cache full,
//! the oldest half of the entries (at least one) is evicted in insertion
//! order, so the contents after any sequence of calls are predictable.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct ConversionCache {
    capacity: usize,
    /// mode → text → output
    entries: HashMap<String, HashMap<String, String>>,
    /// Insertion order, oldest first.
    order: VecDeque<(String, String)>,
}

impl ConversionCache {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cache.capacity)
    }

    pub fn get(&self, mode: &str, text: &str) -> Option<&str> {
        self.entries
            .get(mode)
            .and_then(|inner| inner.get(text))
            .map(String::as_str)
    }

    /// Store a result. Re-inserting an existing key replaces its output but
    /// keeps its original position in the eviction order.
    pub fn insert(&mut self, mode: &str, text: &str, output: String) {
        if let Some(existing) = self
            .entries
            .get_mut(mode)
            .and_then(|inner| inner.get_mut(text))
        {
            *existing = output;
            return;
        }
        if self.order.len() >= self.capacity {
            self.evict_oldest_half();
        }
        self.entries
            .entry(mode.to_string())
            .or_default()
            .insert(text.to_string(), output);
        self.order.push_back((mode.to_string(), text.to_string()));
    }

    fn evict_oldest_half(&mut self) {
        let to_remove = (self.order.len() / 2).max(1);
        for (mode, text) in self.order.drain(..to_remove) {
            if let Some(inner) = self.entries.get_mut(&mode) {
                inner.remove(&text);
                if inner.is_empty() {
                    self.entries.remove(&mode);
                }
            }
        }
        debug!(evicted = to_remove, remaining = self.order.len());
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
