use dnscache_application::ports::CacheRefreshPort;
use dnscache_domain::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Periodically runs refresh passes against the cache.
///
/// The first tick is consumed so no pass runs at startup: entries created
/// right before the job starts get a full interval to be looked up again.
pub struct CacheRefreshJob {
    cache: Arc<dyn CacheRefreshPort>,
    interval: Duration,
    clear_unused: bool,
    shutdown: CancellationToken,
}

impl CacheRefreshJob {
    pub fn new(cache: Arc<dyn CacheRefreshPort>) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            clear_unused: true,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(cache: Arc<dyn CacheRefreshPort>, config: &CacheConfig) -> Self {
        Self::new(cache)
            .with_interval(Duration::from_secs(config.refresh_interval_secs))
            .with_clear_unused(config.clear_unused)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_clear_unused(mut self, clear_unused: bool) -> Self {
        self.clear_unused = clear_unused;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            clear_unused = self.clear_unused,
            "Starting cache refresh job"
        );

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(self.interval.max(Duration::from_millis(1)));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let outcome = self.cache.run_refresh_cycle(self.clear_unused).await;
                        if outcome.visited > 0 {
                            info!(
                                visited = outcome.visited,
                                evicted = outcome.evicted,
                                refreshed = outcome.refreshed,
                                failed = outcome.failed,
                                changed = outcome.changed,
                                cache_size = outcome.cache_size,
                                "Cache refresh cycle completed"
                            );
                        } else {
                            debug!("Cache refresh cycle found no entries");
                        }
                    }
                }
            }
        })
    }
}
