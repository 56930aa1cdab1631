pub mod cache;
pub mod resolver;

pub use cache::{
    CacheEntry, CacheEntrySnapshot, CacheKey, CacheMetrics, CacheMetricsSnapshot, HostCache,
    Visit,
};
pub use resolver::{CachingResolver, CachingResolverBuilder};
