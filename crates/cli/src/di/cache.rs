use dnscache_application::ports::{CacheRefreshPort, RefreshResult};
use dnscache_domain::Config;
use dnscache_infrastructure::dns::{CachingResolver, CachingResolverBuilder};
use dnscache_infrastructure::system::SystemHostResolver;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CacheServices {
    pub resolver: Arc<CachingResolver>,
}

impl CacheServices {
    pub fn new(config: &Config) -> Self {
        info!("Initializing cache services");

        let system = Arc::new(SystemHostResolver::new());

        let resolver = CachingResolverBuilder::new(system)
            .with_config(&config.cache)
            .on_cache_miss(|| debug!("Cache miss, querying system resolver"))
            .on_refresh(|result: &RefreshResult| {
                if result.changed {
                    info!("Cached addresses changed during refresh");
                }
            })
            .build();

        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn refresh_port(&self) -> Arc<dyn CacheRefreshPort> {
        self.resolver.clone()
    }
}
