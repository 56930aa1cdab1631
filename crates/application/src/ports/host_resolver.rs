use async_trait::async_trait;
use dnscache_domain::DomainError;
use std::net::IpAddr;

/// External resolution primitive sitting behind the cache.
///
/// Implementations return literal address strings; the cache never resolves
/// them further.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, DomainError>;

    /// Reverse lookup. Resolvers without PTR support keep the default.
    async fn lookup_addr(&self, addr: IpAddr) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Unsupported(format!("reverse lookup of {}", addr)))
    }
}
