//! Indexed Cache Module
//!
//! Main cache engine combining HashMap storage with recency ordering and
//! explicit size-targeted eviction.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Key, RecencyList};
use crate::error::{CacheError, Result};

// == Indexed Cache ==
/// Key-addressed storage with LRU-ordered eviction.
///
/// The map owns every value and decides existence; the recency list holds
/// keys only and decides ordering and eviction candidacy.
#[derive(Debug)]
pub struct IndexedCache<V> {
    /// Key-value storage
    entries: HashMap<Key, V>,
    /// Recency order over indexed keys
    lru: RecencyList<Key>,
    /// Access and eviction counters
    stats: CacheStats,
}

impl<V> Default for IndexedCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            lru: RecencyList::default(),
            stats: CacheStats::new(),
        }
    }
}

impl<V> IndexedCache<V> {
    // == Constructor ==
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts a value under a new key at the least recently used end.
    ///
    /// A key that is already indexed is rejected with
    /// [`CacheError::DuplicateKey`] and the cache is left unchanged.
    pub fn add(&mut self, key: Key, value: V) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(CacheError::DuplicateKey(key));
        }

        self.lru.add(key);
        self.entries.insert(key, value);
        self.stats.set_total_entries(self.entries.len());

        debug!(key, "Added cache entry");
        Ok(())
    }

    // == Remove ==
    /// Removes a key from both the recency order and the index.
    ///
    /// Returns the removed value, or None if the key was absent.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        if !self.entries.contains_key(&key) {
            return None;
        }

        self.lru.remove(&key);
        let removed = self.entries.remove(&key);
        self.stats.set_total_entries(self.entries.len());

        debug!(key, "Removed cache entry");
        removed
    }

    // == Access ==
    /// Marks a key as most recently used.
    ///
    /// Returns [`CacheError::Miss`] if the key is not indexed or is missing
    /// from the recency order. A hit only reorders.
    pub fn access(&mut self, key: Key) -> Result<()> {
        if !self.entries.contains_key(&key) {
            self.stats.record_miss();
            info!(key, "cache miss for key {}", key);
            return Err(CacheError::Miss(key));
        }

        if !self.lru.access(&key) {
            self.stats.record_miss();
            warn!(key, "cache miss for key {}: indexed but not in recency order", key);
            return Err(CacheError::Miss(key));
        }

        self.stats.record_hit();
        debug!(key, "Cache hit");
        Ok(())
    }

    // == Evict ==
    /// Shrinks the cache to at most `target_size` entries.
    ///
    /// The recency list is truncated first, then every index entry whose key
    /// is no longer in the list is purged. Returns the number purged.
    pub fn evict(&mut self, target_size: usize) -> usize {
        let dropped = self.lru.evict(target_size);
        if dropped.is_empty() && self.entries.len() <= self.lru.len() {
            return 0;
        }

        let live: HashSet<Key> = self.lru.iter().copied().collect();
        let before = self.entries.len();
        self.entries.retain(|key, _| live.contains(key));
        let purged = before - self.entries.len();

        self.stats.record_evictions(purged);
        self.stats.set_total_entries(self.entries.len());

        info!(
            target_size,
            purged,
            remaining = self.entries.len(),
            "Evicted least recently used entries"
        );
        purged
    }

    // == Get ==
    /// Returns the value for a key without changing recency order.
    pub fn get(&self, key: Key) -> Option<&V> {
        self.entries.get(&key)
    }

    // == Contains ==
    /// Checks if a key is indexed. Does not change recency order.
    pub fn contains_key(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    // == Iter ==
    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &V)> + '_ {
        self.lru
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (*key, value)))
    }

    /// Keys in recency order, most recently used first.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.lru.iter().copied()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Diagnostic Dump ==
impl<V: fmt::Display> fmt::Display for IndexedCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "Buffer {} :\t{}", key, value)?;
        }
        Ok(())
    }
}
