use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct CacheMetrics {
    // Hot counters, updated on every lookup.
    pub hits: AtomicU64,
    pub misses: AtomicU64,

    // Cold counters, updated on insert and during refresh passes.
    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
    pub refreshes: AtomicU64,
    pub refresh_failures: AtomicU64,
    pub changes: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    pub fn snapshot(&self, total_entries: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries,
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            insertions: self.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.evictions.load(AtomicOrdering::Relaxed),
            refreshes: self.refreshes.load(AtomicOrdering::Relaxed),
            refresh_failures: self.refresh_failures.load(AtomicOrdering::Relaxed),
            changes: self.changes.load(AtomicOrdering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }
}

/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Default)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub refreshes: u64,
    pub refresh_failures: u64,
    pub changes: u64,
    pub hit_rate: f64,
}
