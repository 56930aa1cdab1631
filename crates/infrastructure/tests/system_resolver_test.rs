use dnscache_application::ports::HostResolver;
use dnscache_infrastructure::system::SystemHostResolver;
use std::net::IpAddr;
use std::time::Duration;

#[tokio::test]
async fn test_literal_ipv4_resolves_to_itself() {
    let resolver = SystemHostResolver::new();
    let addrs = resolver.lookup_host("192.0.2.1").await.unwrap();
    assert_eq!(addrs, vec!["192.0.2.1".to_string()]);
}

#[tokio::test]
async fn test_literal_ipv6_resolves_to_itself() {
    let resolver = SystemHostResolver::new();
    let addrs = resolver.lookup_host("2001:db8::1").await.unwrap();
    assert_eq!(addrs, vec!["2001:db8::1".to_string()]);
}

#[tokio::test]
async fn test_reverse_lookup_is_unsupported() {
    let resolver = SystemHostResolver::default();
    let result = resolver.lookup_addr("192.0.2.1".parse().unwrap()).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires a working platform resolver"]
async fn test_localhost_resolves_to_literal_addresses() {
    let resolver = SystemHostResolver::new().with_timeout(Duration::from_secs(5));
    let addrs = resolver.lookup_host("localhost").await.unwrap();

    assert!(!addrs.is_empty());
    for addr in &addrs {
        assert!(
            addr.parse::<IpAddr>().is_ok(),
            "got {:?}; want a literal IP address",
            addr
        );
    }

    let mut unique = addrs.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), addrs.len(), "addresses must be de-duplicated");
}

#[tokio::test]
#[ignore = "requires a working platform resolver"]
async fn test_invalid_hostname_fails() {
    let resolver = SystemHostResolver::new().with_timeout(Duration::from_secs(5));
    let result = resolver
        .lookup_host("this.hostname.definitely.does.not.exist.invalid")
        .await;
    assert!(result.is_err());
}
