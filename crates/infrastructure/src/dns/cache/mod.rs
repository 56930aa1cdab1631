pub mod entry;
pub mod key;
pub mod metrics;
pub mod storage;

pub use entry::{CacheEntry, CacheEntrySnapshot};
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use storage::{HostCache, Visit};
