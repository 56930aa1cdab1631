//! dnscache Domain Layer
pub mod config;
pub mod errors;
pub mod lookup;
pub mod refresh;

pub use config::{CacheConfig, CliOverrides, Config, ConfigError, LoggingConfig};
pub use errors::DomainError;
pub use lookup::{normalize_host, LookupKind};
pub use refresh::{RefreshOutcome, RefreshResult};
