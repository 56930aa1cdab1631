use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Deadline and cancellation applied to the external call of a lookup.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    pub timeout: Option<Duration>,
    pub cancel: CancellationToken,
}

impl LookupContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }
}
