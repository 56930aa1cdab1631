use super::super::cache::{CacheEntry, CacheKey, CacheMetricsSnapshot, HostCache};
use super::inflight::{self, InflightMap, InflightRole};
use async_trait::async_trait;
use dashmap::DashMap;
use dnscache_application::ports::{
    CacheMissObserver, CacheRefreshPort, HostResolver, LookupContext, RefreshObserver,
    RefreshOutcome,
};
use dnscache_domain::{normalize_host, DomainError, LookupKind};
use rustc_hash::FxBuildHasher;
use std::future::Future;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Caching front for a `HostResolver`.
///
/// Each instance owns its own `HostCache`. Lookups are served from the store
/// when possible; entries are kept alive by being looked up between two
/// refresh passes and evicted otherwise (see `refresh`).
pub struct CachingResolver {
    pub(super) resolver: Arc<dyn HostResolver>,
    pub(super) cache: Arc<HostCache>,
    pub(super) inflight: InflightMap,
    pub(super) on_cache_miss: Option<Arc<dyn CacheMissObserver>>,
    pub(super) refresh_callback: Option<Arc<dyn RefreshObserver>>,
    pub(super) enabled: bool,
    pub(super) lookup_timeout: Option<Duration>,
    pub(super) refresh_timeout: Duration,
    pub(super) refresh_concurrency: usize,
}

impl CachingResolver {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        super::CachingResolverBuilder::new(resolver).build()
    }

    pub(super) fn new_inflight() -> InflightMap {
        Arc::new(DashMap::with_hasher(FxBuildHasher))
    }

    pub fn cache(&self) -> &Arc<HostCache> {
        &self.cache
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.cache.metrics_snapshot()
    }

    /// Resolves `host` to its addresses, consulting the cache first.
    ///
    /// A failed resolution is returned to the caller and never cached.
    pub async fn lookup_host(
        &self,
        ctx: &LookupContext,
        host: &str,
    ) -> Result<Vec<String>, DomainError> {
        let name = normalize_host(host)
            .ok_or_else(|| DomainError::InvalidDomainName(host.to_string()))?;
        self.lookup(ctx, CacheKey::host(&name)).await
    }

    /// Resolves `addr` to the host names pointing at it, consulting the cache first.
    pub async fn lookup_addr(
        &self,
        ctx: &LookupContext,
        addr: &str,
    ) -> Result<Vec<String>, DomainError> {
        let ip: IpAddr = addr
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(addr.to_string()))?;
        self.lookup(ctx, CacheKey::addr(&ip.to_string())).await
    }

    async fn lookup(&self, ctx: &LookupContext, key: CacheKey) -> Result<Vec<String>, DomainError> {
        if !self.enabled {
            self.notify_miss();
            return self.with_context(ctx, self.resolve_key(&key)).await;
        }

        if let Some(results) = self.cache.touch(&key) {
            debug!(key = %key, addresses = results.len(), "Cache HIT");
            return Ok(results);
        }

        debug!(key = %key, "Cache MISS");
        self.notify_miss();

        match inflight::join(&self.inflight, &key) {
            InflightRole::Leader(guard) => {
                let addresses = self.resolve_and_store(ctx, key).await?;
                guard.publish(&addresses);
                Ok(addresses)
            }
            InflightRole::Follower(rx) => {
                let shared = self
                    .with_context(ctx, async { Ok(inflight::wait_for_leader(rx).await) })
                    .await?;
                match shared {
                    Some(addresses) => {
                        debug!(key = %key, "Joined in-flight lookup");
                        Ok(addresses)
                    }
                    None => self.resolve_and_store(ctx, key).await,
                }
            }
        }
    }

    async fn resolve_and_store(
        &self,
        ctx: &LookupContext,
        key: CacheKey,
    ) -> Result<Vec<String>, DomainError> {
        let addresses = self
            .with_context(ctx, self.resolve_key(&key))
            .await
            .inspect_err(|e| debug!(key = %key, error = %e, "Lookup failed, not cached"))?;

        self.cache.put(key, CacheEntry::new(addresses.clone()));
        Ok(addresses)
    }

    /// Calls the external primitive for the name part of `key`.
    pub(super) async fn resolve_key(&self, key: &CacheKey) -> Result<Vec<String>, DomainError> {
        match key.kind {
            LookupKind::Host => self.resolver.lookup_host(&key.name).await,
            LookupKind::Addr => {
                let ip: IpAddr = key
                    .name
                    .parse()
                    .map_err(|_| DomainError::InvalidIpAddress(key.name.to_string()))?;
                self.resolver.lookup_addr(ip).await
            }
        }
    }

    /// Bounds `fut` by the context's deadline (or the configured default)
    /// and its cancellation token.
    async fn with_context<T>(
        &self,
        ctx: &LookupContext,
        fut: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        let timeout = ctx.timeout.or(self.lookup_timeout);
        let bounded = async {
            match timeout {
                Some(limit) => tokio::time::timeout(limit, fut)
                    .await
                    .map_err(|_| DomainError::QueryTimeout)?,
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => Err(DomainError::Cancelled),
            result = bounded => result,
        }
    }

    fn notify_miss(&self) {
        if let Some(observer) = &self.on_cache_miss {
            observer.on_cache_miss();
        }
    }
}

#[async_trait]
impl CacheRefreshPort for CachingResolver {
    async fn run_refresh_cycle(&self, clear_unused: bool) -> RefreshOutcome {
        self.refresh_with_callback(clear_unused).await
    }

    fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
