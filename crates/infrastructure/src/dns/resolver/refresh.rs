use super::super::cache::{CacheKey, Visit};
use super::caching_resolver::CachingResolver;
use dnscache_application::ports::RefreshOutcome;
use dnscache_domain::DomainError;
use futures::stream::{self, StreamExt};
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::{debug, info, warn};

/// Refresh passes.
///
/// A pass has two phases. First a single walk over the store evicts every
/// entry whose used flag is clear (when `clear_unused` is set) and collects
/// the keys of the survivors. Then the survivors are re-resolved with bounded
/// concurrency and updated one by one. No store lock is held while a
/// resolution is in flight, so lookups keep being served during a pass.
impl CachingResolver {
    /// Runs one refresh pass without notifying the refresh callback.
    pub async fn refresh(&self, clear_unused: bool) -> RefreshOutcome {
        self.run_refresh_pass(clear_unused).await
    }

    /// Runs one refresh pass and then invokes the refresh callback, if any,
    /// exactly once with the aggregate result.
    pub async fn refresh_with_callback(&self, clear_unused: bool) -> RefreshOutcome {
        let outcome = self.run_refresh_pass(clear_unused).await;

        if let Some(callback) = &self.refresh_callback {
            callback.on_refresh(&outcome.result());
        }

        outcome
    }

    async fn run_refresh_pass(&self, clear_unused: bool) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::default();
        let mut survivors: Vec<(CacheKey, u64)> = Vec::with_capacity(self.cache.len());

        self.cache.for_each(|key, entry| {
            outcome.visited += 1;
            if clear_unused && !entry.is_used() {
                debug!(key = %key, "Evicting unused entry");
                outcome.evicted += 1;
                return Visit::Remove;
            }
            survivors.push((key.clone(), entry.generation()));
            Visit::Keep
        });

        let mut resolutions = stream::iter(survivors)
            .map(|(key, generation)| async move {
                let result = self.resolve_for_refresh(&key).await;
                (key, generation, result)
            })
            .buffer_unordered(self.refresh_concurrency);

        while let Some((key, generation, result)) = resolutions.next().await {
            match result {
                Ok(addresses) => self.apply_refresh(&key, generation, addresses, &mut outcome),
                Err(e) => {
                    // Keep the stale value and the used flag untouched.
                    warn!(key = %key, error = %e, "Refresh failed, keeping cached value");
                    outcome.failed += 1;
                    self.cache
                        .metrics()
                        .refresh_failures
                        .fetch_add(1, AtomicOrdering::Relaxed);
                }
            }
        }

        outcome.cache_size = self.cache.len();

        info!(
            visited = outcome.visited,
            evicted = outcome.evicted,
            refreshed = outcome.refreshed,
            failed = outcome.failed,
            changed = outcome.changed,
            cache_size = outcome.cache_size,
            "Refresh pass completed"
        );

        outcome
    }

    fn apply_refresh(
        &self,
        key: &CacheKey,
        generation: u64,
        addresses: Vec<String>,
        outcome: &mut RefreshOutcome,
    ) {
        let updated = self.cache.update_visited(key, generation, |entry| {
            let changed = !entry.same_addresses(&addresses);
            if changed {
                entry.replace_results(addresses);
            }
            entry.reset_used();
            changed
        });

        let metrics = self.cache.metrics();
        match updated {
            Some(changed) => {
                outcome.refreshed += 1;
                metrics.refreshes.fetch_add(1, AtomicOrdering::Relaxed);
                if changed {
                    debug!(key = %key, "Resolved addresses changed");
                    outcome.changed += 1;
                    metrics.changes.fetch_add(1, AtomicOrdering::Relaxed);
                }
            }
            None => debug!(key = %key, "Entry vanished or re-created during refresh"),
        }
    }

    async fn resolve_for_refresh(&self, key: &CacheKey) -> Result<Vec<String>, DomainError> {
        tokio::time::timeout(self.refresh_timeout, self.resolve_key(key))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }
}
