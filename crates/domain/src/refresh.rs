/// Aggregate result of one refresh pass, handed to the refresh callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshResult {
    /// `true` when at least one entry resolved to a different address set.
    pub changed: bool,
}

/// Counters collected while running a refresh pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Entries present when the pass started.
    pub visited: usize,
    /// Entries dropped because no lookup used them since the previous pass.
    pub evicted: usize,
    /// Entries re-resolved successfully.
    pub refreshed: usize,
    /// Entries whose re-resolution failed and kept their cached value.
    pub failed: usize,
    /// Entries whose address set changed.
    pub changed: usize,
    /// Store size after the pass.
    pub cache_size: usize,
}

impl RefreshOutcome {
    pub fn result(&self) -> RefreshResult {
        RefreshResult {
            changed: self.changed > 0,
        }
    }
}
