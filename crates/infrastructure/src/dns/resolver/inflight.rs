use super::super::cache::CacheKey;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::watch;

pub(super) type InflightSender = Arc<watch::Sender<Option<Arc<Vec<String>>>>>;
pub(super) type InflightMap = Arc<DashMap<CacheKey, InflightSender, FxBuildHasher>>;

/// Role a missing lookup takes in the coalescing protocol.
pub(super) enum InflightRole {
    Leader(InflightLeaderGuard),
    Follower(watch::Receiver<Option<Arc<Vec<String>>>>),
}

pub(super) fn join(inflight: &InflightMap, key: &CacheKey) -> InflightRole {
    match inflight.entry(key.clone()) {
        dashmap::Entry::Occupied(e) => InflightRole::Follower(e.get().subscribe()),
        dashmap::Entry::Vacant(e) => {
            let (tx, _) = watch::channel(None);
            e.insert(Arc::new(tx));
            InflightRole::Leader(InflightLeaderGuard {
                inflight: Arc::clone(inflight),
                key: key.clone(),
            })
        }
    }
}

/// Removes the in-flight slot when the leader finishes, fails or is dropped.
///
/// Dropping the last sender closes the channel, which wakes followers that
/// are still waiting; they fall back to resolving on their own.
pub(super) struct InflightLeaderGuard {
    inflight: InflightMap,
    key: CacheKey,
}

impl InflightLeaderGuard {
    pub(super) fn publish(&self, addresses: &[String]) {
        if let Some(tx) = self.inflight.get(&self.key) {
            tx.send_replace(Some(Arc::new(addresses.to_vec())));
        }
    }
}

impl Drop for InflightLeaderGuard {
    fn drop(&mut self) {
        self.inflight.remove(&self.key);
    }
}

/// Waits for the leader's published result.
///
/// `None` means the leader gave up without a result.
pub(super) async fn wait_for_leader(
    mut rx: watch::Receiver<Option<Arc<Vec<String>>>>,
) -> Option<Vec<String>> {
    loop {
        let current: Option<Arc<Vec<String>>> = rx.borrow_and_update().clone();
        if let Some(addresses) = current {
            return Some(addresses.as_ref().clone());
        }
        if rx.changed().await.is_err() {
            let last: Option<Arc<Vec<String>>> = rx.borrow().clone();
            return last.map(|addresses| addresses.as_ref().clone());
        }
    }
}
