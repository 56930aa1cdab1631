use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// When disabled every lookup goes straight to the resolver.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Upper bound for a single re-resolution during a refresh pass.
    #[serde(default = "default_refresh_timeout_ms")]
    pub refresh_timeout_ms: u64,

    /// Maximum number of re-resolutions in flight during a refresh pass.
    #[serde(default = "default_refresh_concurrency")]
    pub refresh_concurrency: usize,

    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Evict entries not looked up since the previous refresh pass.
    #[serde(default = "default_true")]
    pub clear_unused: bool,

    #[serde(default = "default_shard_amount")]
    pub shard_amount: usize,
}

impl CacheConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn refresh_timeout(&self) -> Duration {
        Duration::from_millis(self.refresh_timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lookup_timeout_ms: default_lookup_timeout_ms(),
            refresh_timeout_ms: default_refresh_timeout_ms(),
            refresh_concurrency: default_refresh_concurrency(),
            refresh_interval_secs: default_refresh_interval_secs(),
            clear_unused: true,
            shard_amount: default_shard_amount(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}

fn default_refresh_timeout_ms() -> u64 {
    5000
}

fn default_refresh_concurrency() -> usize {
    8
}

fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_shard_amount() -> usize {
    16
}
