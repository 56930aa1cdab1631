use crate::di::CacheServices;
use dnscache_application::ports::LookupContext;
use tracing::warn;

pub async fn lookup(services: &CacheServices, hosts: &[String], repeat: u32) {
    let ctx = LookupContext::default();

    for host in hosts {
        for attempt in 1..=repeat.max(1) {
            let hits_before = services.resolver.metrics().hits;
            match services.resolver.lookup_host(&ctx, host).await {
                Ok(addresses) => {
                    let hit = services.resolver.metrics().hits > hits_before;
                    println!(
                        "{}\t#{}\t{}\t{}",
                        host,
                        attempt,
                        if hit { "hit" } else { "miss" },
                        addresses.join(" ")
                    );
                }
                Err(e) => {
                    warn!(host = %host, error = %e, "Lookup failed");
                    println!("{}\t#{}\terror\t{}", host, attempt, e);
                }
            }
        }
    }

    let metrics = services.resolver.metrics();
    println!(
        "entries={} hits={} misses={} hit_rate={:.1}%",
        metrics.total_entries, metrics.hits, metrics.misses, metrics.hit_rate
    );
}
