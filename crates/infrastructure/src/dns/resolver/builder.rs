use super::super::cache::HostCache;
use super::caching_resolver::CachingResolver;
use dnscache_application::ports::{CacheMissObserver, HostResolver, RefreshObserver};
use dnscache_domain::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct CachingResolverBuilder {
    resolver: Arc<dyn HostResolver>,
    cache: Option<Arc<HostCache>>,
    config: CacheConfig,
    lookup_timeout: Option<Duration>,
    on_cache_miss: Option<Arc<dyn CacheMissObserver>>,
    refresh_callback: Option<Arc<dyn RefreshObserver>>,
}

impl CachingResolverBuilder {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            resolver,
            cache: None,
            config: CacheConfig::default(),
            lookup_timeout: None,
            on_cache_miss: None,
            refresh_callback: None,
        }
    }

    /// Applies cache settings. Also makes `lookup_timeout_ms` the default
    /// deadline for lookups whose context carries none. Values are clamped in
    /// `build`; run `Config::validate` to reject them instead.
    pub fn with_config(mut self, config: &CacheConfig) -> Self {
        self.config = config.clone();
        self.lookup_timeout = Some(config.lookup_timeout());
        self
    }

    pub fn with_cache(mut self, cache: Arc<HostCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    pub fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.config.refresh_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_refresh_concurrency(mut self, concurrency: usize) -> Self {
        self.config.refresh_concurrency = concurrency;
        self
    }

    pub fn on_cache_miss(mut self, observer: impl CacheMissObserver + 'static) -> Self {
        self.on_cache_miss = Some(Arc::new(observer));
        self
    }

    pub fn with_miss_observer(mut self, observer: Arc<dyn CacheMissObserver>) -> Self {
        self.on_cache_miss = Some(observer);
        self
    }

    pub fn on_refresh(mut self, observer: impl RefreshObserver + 'static) -> Self {
        self.refresh_callback = Some(Arc::new(observer));
        self
    }

    pub fn with_refresh_observer(mut self, observer: Arc<dyn RefreshObserver>) -> Self {
        self.refresh_callback = Some(observer);
        self
    }

    pub fn build(self) -> CachingResolver {
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(HostCache::new(self.config.shard_amount)));

        info!(
            enabled = self.config.enabled,
            refresh_concurrency = self.config.refresh_concurrency,
            refresh_timeout_ms = self.config.refresh_timeout_ms,
            miss_hook = self.on_cache_miss.is_some(),
            refresh_hook = self.refresh_callback.is_some(),
            "Building caching resolver"
        );

        CachingResolver {
            resolver: self.resolver,
            cache,
            inflight: CachingResolver::new_inflight(),
            on_cache_miss: self.on_cache_miss,
            refresh_callback: self.refresh_callback,
            enabled: self.config.enabled,
            lookup_timeout: self.lookup_timeout,
            refresh_timeout: self.config.refresh_timeout().max(Duration::from_millis(1)),
            refresh_concurrency: self.config.refresh_concurrency.max(1),
        }
    }
}
