use async_trait::async_trait;
use dnscache_application::ports::HostResolver;
use dnscache_domain::DomainError;
use rustc_hash::FxHashSet;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// `HostResolver` backed by the platform resolver (`getaddrinfo` through
/// `tokio::net::lookup_host`).
pub struct SystemHostResolver {
    timeout: Option<Duration>,
}

impl SystemHostResolver {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keeps the first occurrence of every address, in resolver order.
    fn dedup_addresses(addrs: impl Iterator<Item = IpAddr>) -> Vec<String> {
        let mut seen = FxHashSet::default();
        addrs
            .filter(|ip| seen.insert(*ip))
            .map(|ip| ip.to_string())
            .collect()
    }
}

impl Default for SystemHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, DomainError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip.to_string()]);
        }

        let lookup = tokio::net::lookup_host((host, 0));
        let addrs = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .map_err(|_| DomainError::QueryTimeout)?,
            None => lookup.await,
        }
        .map_err(|e| DomainError::ResolutionFailed {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        let addresses = Self::dedup_addresses(addrs.map(|addr| addr.ip()));

        debug!(
            host = %host,
            addresses = addresses.len(),
            "System resolver lookup completed"
        );

        Ok(addresses)
    }
}
