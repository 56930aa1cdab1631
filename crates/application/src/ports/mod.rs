mod cache_refresh_port;
mod host_resolver;
mod lookup_context;
mod observers;

pub use cache_refresh_port::CacheRefreshPort;
pub use host_resolver::HostResolver;
pub use lookup_context::LookupContext;
pub use observers::{CacheMissObserver, RefreshObserver};

// Re-export for convenience
pub use dnscache_domain::{RefreshOutcome, RefreshResult};
