//! Cache Store Module
//!
//! Main cache engine: an insertion-ordered entry list behind a single
//! coarse lock, with lazy expiry cleanup triggered by reads and size
//! accounting rather than by a background task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::cache::{AgedEntry, CacheStats};
use crate::clock::{Clock, SystemClock};
use crate::error::{CacheError, Result};

// == Aged Cache ==
/// Thread-safe in-memory cache with per-entry TTL and lazy eviction.
///
/// Every public operation acquires the same exclusive lock for its full
/// duration, so a cleanup pass never interleaves with a lookup or an
/// insert. Expired entries are only removed when `get`, `size` or
/// `is_empty` runs; nothing is evicted purely by the passage of time.
pub struct AgedCache {
    /// Time source used to stamp and evaluate expiry
    clock: Arc<dyn Clock>,
    /// Entry list and counters, guarded as one unit
    inner: Mutex<CacheInner>,
}

/// State protected by the cache lock.
#[derive(Debug, Default)]
struct CacheInner {
    /// Entries in insertion order, at most one per distinct key
    entries: Vec<AgedEntry>,
    /// Performance counters
    stats: CacheStats,
}

impl AgedCache {
    // == Constructors ==
    /// Creates an empty cache backed by the wall-clock UTC time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache backed by the given clock.
    ///
    /// # Arguments
    /// * `clock` - Time source consulted on every insert and cleanup pass
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    // == Put ==
    /// Stores a key-value pair with the given retention.
    ///
    /// If the key already exists, its value is overwritten and its expiry
    /// restamped from the current clock reading, without moving the entry
    /// from its original position. A new key is appended at the tail of
    /// insertion order. `put` never runs a cleanup pass.
    ///
    /// # Arguments
    /// * `key` - The key to store; must not be empty
    /// * `value` - The value to store; must not be empty
    /// * `retention_ms` - Lifetime in milliseconds from now
    ///
    /// # Errors
    /// Returns `CacheError::InvalidArgument` for an empty key or value,
    /// leaving the cache unmodified.
    pub fn put(&self, key: &str, value: &str, retention_ms: u64) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        if value.is_empty() {
            return Err(CacheError::InvalidArgument(
                "value must not be empty".to_string(),
            ));
        }

        let mut inner = self.lock();

        match inner.entries.iter().position(|entry| entry.key == key) {
            Some(index) => {
                inner.entries[index].refresh(value.to_string(), retention_ms, &*self.clock);
                trace!(key, retention_ms, "updated entry in place");
            }
            None => {
                inner.entries.push(AgedEntry::new(
                    key.to_string(),
                    value.to_string(),
                    retention_ms,
                    &*self.clock,
                ));
                trace!(key, retention_ms, "inserted new entry");
            }
        }

        Ok(())
    }

    // == Get ==
    /// Retrieves the value for a key, or `None` if the key never existed,
    /// was evicted, or has expired.
    ///
    /// Runs a full cleanup pass before the lookup. The expiry re-check on
    /// the found entry is a second guard; cleanup already removed
    /// everything expired at this clock reading.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut inner = self.lock();
        self.evict_expired(&mut inner);

        let found = inner
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .filter(|entry| !entry.is_expired(&*self.clock))
            .map(|entry| entry.value.clone());

        match found {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }

        found
    }

    // == Size ==
    /// Runs a full cleanup pass, then returns the number of live entries.
    pub fn size(&self) -> usize {
        let mut inner = self.lock();
        self.evict_expired(&mut inner);
        inner.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no live entries.
    ///
    /// Delegates to `size()`, so it shares the eviction side effect.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    ///
    /// Reading stats does not trigger cleanup, so `live_entries` may still
    /// count entries whose expiry has passed but which no operation has
    /// evicted yet.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.live_entries = inner.entries.len();
        stats
    }

    // == Cleanup Pass ==
    /// Unlinks every expired entry, in insertion order. The caller holds
    /// the cache lock for the whole pass.
    fn evict_expired(&self, inner: &mut CacheInner) {
        let before = inner.entries.len();
        inner
            .entries
            .retain(|entry| !entry.is_expired(&*self.clock));

        let evicted = before - inner.entries.len();
        if evicted > 0 {
            inner.stats.record_evictions(evicted as u64);
            debug!(evicted, "cleanup removed expired entries");
        }
    }

    // == Lock ==
    /// Acquires the cache lock, recovering from poisoning. A panicking
    /// peer cannot leave the entry list half-mutated: each critical
    /// section performs a single structural change.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AgedCache {
    fn default() -> Self {
        Self::new()
    }
}
