pub mod builder;
pub mod caching_resolver;
mod inflight;
pub mod refresh;

pub use builder::CachingResolverBuilder;
pub use caching_resolver::CachingResolver;
