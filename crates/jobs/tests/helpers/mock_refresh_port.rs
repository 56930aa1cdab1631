use async_trait::async_trait;
use dnscache_application::ports::{CacheRefreshPort, RefreshOutcome};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct MockCacheRefreshPort {
    refresh_calls: Arc<AtomicU64>,
    last_clear_unused: Arc<AtomicBool>,
    outcome: Mutex<RefreshOutcome>,
}

impl MockCacheRefreshPort {
    pub fn new() -> Self {
        Self {
            refresh_calls: Arc::new(AtomicU64::new(0)),
            last_clear_unused: Arc::new(AtomicBool::new(false)),
            outcome: Mutex::new(RefreshOutcome::default()),
        }
    }

    pub async fn set_outcome(&self, outcome: RefreshOutcome) {
        *self.outcome.lock().await = outcome;
    }

    pub fn refresh_call_count(&self) -> u64 {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn last_clear_unused(&self) -> bool {
        self.last_clear_unused.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheRefreshPort for MockCacheRefreshPort {
    async fn run_refresh_cycle(&self, clear_unused: bool) -> RefreshOutcome {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.last_clear_unused.store(clear_unused, Ordering::SeqCst);
        self.outcome.lock().await.clone()
    }

    fn cache_size(&self) -> usize {
        0
    }
}
