use dnscache_domain::RefreshResult;

/// Notified once per cache miss, before the external lookup completes.
pub trait CacheMissObserver: Send + Sync {
    fn on_cache_miss(&self);
}

impl<F> CacheMissObserver for F
where
    F: Fn() + Send + Sync,
{
    fn on_cache_miss(&self) {
        self()
    }
}

/// Notified once at the end of every refresh pass run with a callback.
pub trait RefreshObserver: Send + Sync {
    fn on_refresh(&self, result: &RefreshResult);
}

impl<F> RefreshObserver for F
where
    F: Fn(&RefreshResult) + Send + Sync,
{
    fn on_refresh(&self, result: &RefreshResult) {
        self(result)
    }
}
