use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Cached result of one lookup.
///
/// `used` is atomic so the hit path can flag an entry while holding only a
/// shared shard lock. Results are only replaced under an exclusive lock.
/// `generation` is stamped by `HostCache::put` and tells a re-created entry
/// apart from the one a refresh pass visited under the same key.
#[derive(Debug)]
pub struct CacheEntry {
    results: Vec<String>,
    used: AtomicBool,
    generation: u64,
}

impl CacheEntry {
    /// New entries start used: the lookup that created them counts as a use.
    pub fn new(results: Vec<String>) -> Self {
        Self {
            results,
            used: AtomicBool::new(true),
            generation: 0,
        }
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    #[inline]
    pub fn is_used(&self) -> bool {
        self.used.load(AtomicOrdering::Acquire)
    }

    #[inline]
    pub fn mark_used(&self) {
        self.used.store(true, AtomicOrdering::Release);
    }

    #[inline]
    pub fn reset_used(&self) {
        self.used.store(false, AtomicOrdering::Release);
    }

    pub fn replace_results(&mut self, results: Vec<String>) {
        self.results = results;
    }

    /// Order-insensitive comparison against a freshly resolved address list.
    pub fn same_addresses(&self, other: &[String]) -> bool {
        let current: FxHashSet<&str> = self.results.iter().map(String::as_str).collect();
        let fresh: FxHashSet<&str> = other.iter().map(String::as_str).collect();
        current == fresh
    }

    pub fn snapshot(&self) -> CacheEntrySnapshot {
        CacheEntrySnapshot {
            results: self.results.clone(),
            used: self.is_used(),
        }
    }
}

impl Clone for CacheEntry {
    fn clone(&self) -> Self {
        Self {
            results: self.results.clone(),
            used: AtomicBool::new(self.is_used()),
            generation: self.generation,
        }
    }
}

/// Owned copy of an entry, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntrySnapshot {
    pub results: Vec<String>,
    pub used: bool,
}
