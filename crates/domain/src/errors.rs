use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Resolution failed for {host}: {reason}")]
    ResolutionFailed { host: String, reason: String },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Lookup cancelled")]
    Cancelled,

    #[error("Operation not supported: {0}")]
    Unsupported(String),
}
