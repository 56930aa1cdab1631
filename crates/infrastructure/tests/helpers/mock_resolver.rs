use async_trait::async_trait;
use dnscache_application::ports::HostResolver;
use dnscache_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted resolver: answers come from a table, unknown names fail.
pub struct MockHostResolver {
    answers: Mutex<HashMap<String, Result<Vec<String>, DomainError>>>,
    reverse: Mutex<HashMap<IpAddr, Vec<String>>>,
    calls: Mutex<HashMap<String, u64>>,
    total_calls: AtomicU64,
    delay: Mutex<Option<Duration>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            reverse: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            total_calls: AtomicU64::new(0),
            delay: Mutex::new(None),
        }
    }

    pub fn with_answer(self, host: &str, addresses: &[&str]) -> Self {
        self.set_answer(host, addresses);
        self
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn set_answer(&self, host: &str, addresses: &[&str]) {
        self.answers.lock().unwrap().insert(
            host.to_string(),
            Ok(addresses.iter().map(|a| a.to_string()).collect()),
        );
    }

    pub fn set_failure(&self, host: &str) {
        self.answers.lock().unwrap().insert(
            host.to_string(),
            Err(DomainError::ResolutionFailed {
                host: host.to_string(),
                reason: "scripted failure".to_string(),
            }),
        );
    }

    pub fn set_reverse(&self, ip: &str, names: &[&str]) {
        self.reverse.lock().unwrap().insert(
            ip.parse().unwrap(),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn call_count(&self, name: &str) -> u64 {
        self.calls.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls.load(Ordering::SeqCst)
    }

    fn record_call(&self, name: &str) -> Option<Duration> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_insert(0) += 1;
        *self.delay.lock().unwrap()
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, DomainError> {
        if let Some(delay) = self.record_call(host) {
            tokio::time::sleep(delay).await;
        }

        self.answers
            .lock()
            .unwrap()
            .get(host)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::ResolutionFailed {
                    host: host.to_string(),
                    reason: "no such host".to_string(),
                })
            })
    }

    async fn lookup_addr(&self, addr: IpAddr) -> Result<Vec<String>, DomainError> {
        if let Some(delay) = self.record_call(&addr.to_string()) {
            tokio::time::sleep(delay).await;
        }

        self.reverse
            .lock()
            .unwrap()
            .get(&addr)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed {
                host: addr.to_string(),
                reason: "no PTR record".to_string(),
            })
    }
}
