use async_trait::async_trait;
use dnscache_domain::RefreshOutcome;

/// Port used by the background refresh job to drive refresh passes.
#[async_trait]
pub trait CacheRefreshPort: Send + Sync {
    /// Run one refresh pass, reporting through the registered refresh hook.
    async fn run_refresh_cycle(&self, clear_unused: bool) -> RefreshOutcome;

    fn cache_size(&self) -> usize;
}
