use super::{CacheEntry, CacheEntrySnapshot, CacheKey, CacheMetrics, CacheMetricsSnapshot};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_SHARD_AMOUNT: usize = 16;

/// Decision returned by a `HostCache::for_each` visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Remove,
}

/// Synchronized key to entry store shared by lookups and refresh passes.
///
/// Every operation locks at most one shard and never hands out a reference
/// into the map, so callers cannot hold a lock across an await point.
pub struct HostCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    metrics: Arc<CacheMetrics>,
    next_generation: AtomicU64,
}

impl HostCache {
    /// `shard_amount` is rounded up to a power of two of at least 2.
    pub fn new(shard_amount: usize) -> Self {
        let shard_amount = shard_amount.max(2).next_power_of_two();
        info!(shard_amount, "Initializing host cache");

        Self {
            entries: DashMap::with_hasher_and_shard_amount(FxBuildHasher, shard_amount),
            metrics: Arc::new(CacheMetrics::default()),
            next_generation: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the entry stored under `key`. Does not mark it used.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntrySnapshot> {
        self.entries.get(key).map(|entry| entry.snapshot())
    }

    /// Hit path: marks the entry used and returns a copy of its results.
    pub fn touch(&self, key: &CacheKey) -> Option<Vec<String>> {
        match self.entries.get(key) {
            Some(entry) => {
                entry.mark_used();
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(entry.results().to_vec())
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    /// Inserts `entry`, replacing whatever was stored under `key`, and stamps
    /// it with a fresh generation.
    pub fn put(&self, key: CacheKey, mut entry: CacheEntry) {
        entry.set_generation(self.next_generation.fetch_add(1, AtomicOrdering::Relaxed));
        debug!(key = %key, addresses = entry.results().len(), "Inserted entry into cache");
        self.entries.insert(key, entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn delete(&self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Applies `f` to the entry under `key`. Returns `None` if it is gone.
    pub fn update<R>(&self, key: &CacheKey, f: impl FnOnce(&mut CacheEntry) -> R) -> Option<R> {
        self.entries.get_mut(key).map(|mut entry| f(entry.value_mut()))
    }

    /// Like `update`, but only if the stored entry still carries `generation`.
    /// An entry deleted and re-created under `key` counts as gone.
    pub fn update_visited<R>(
        &self,
        key: &CacheKey,
        generation: u64,
        f: impl FnOnce(&mut CacheEntry) -> R,
    ) -> Option<R> {
        let mut entry = self.entries.get_mut(key)?;
        if entry.generation() != generation {
            return None;
        }
        Some(f(entry.value_mut()))
    }

    /// Visits every entry, one shard at a time, under that shard's write lock.
    ///
    /// Returning `Visit::Remove` deletes the visited entry. Entries inserted
    /// into an already visited shard while the walk runs are not seen.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&CacheKey, &mut CacheEntry) -> Visit,
    {
        let mut removed = 0u64;
        self.entries.retain(|key, entry| match visit(key, entry) {
            Visit::Keep => true,
            Visit::Remove => {
                removed += 1;
                false
            }
        });
        if removed > 0 {
            self.metrics
                .evictions
                .fetch_add(removed, AtomicOrdering::Relaxed);
        }
    }

    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn clear(&self) {
        let before = self.entries.len();
        self.entries.clear();
        info!(entries_removed = before, "Cache cleared");
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len())
    }
}

impl Default for HostCache {
    fn default() -> Self {
        Self::new(DEFAULT_SHARD_AMOUNT)
    }
}
