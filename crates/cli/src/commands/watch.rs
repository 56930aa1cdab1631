use crate::di::CacheServices;
use dnscache_application::ports::LookupContext;
use dnscache_domain::Config;
use dnscache_jobs::{CacheRefreshJob, JobRunner};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Keeps looking up `hosts` once per refresh interval so their entries stay
/// alive, while the refresh job re-resolves them in the background.
pub async fn watch(
    services: &CacheServices,
    config: &Config,
    hosts: &[String],
) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let ctx = LookupContext::default().with_cancellation(shutdown.clone());

    let handles = JobRunner::new()
        .with_cache_refresh(CacheRefreshJob::from_config(
            services.refresh_port(),
            &config.cache,
        ))
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let mut ticker =
        tokio::time::interval(Duration::from_secs(config.cache.refresh_interval_secs));

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    error!(error = %e, "Failed to listen for shutdown signal");
                }
                info!("Shutdown requested");
                break;
            }
            _ = ticker.tick() => {
                for host in hosts {
                    match services.resolver.lookup_host(&ctx, host).await {
                        Ok(addresses) => info!(host = %host, addresses = ?addresses, "Resolved"),
                        Err(e) => warn!(host = %host, error = %e, "Lookup failed"),
                    }
                }
            }
        }
    }

    shutdown.cancel();
    for handle in handles {
        handle.await?;
    }

    info!("dnscache shutdown complete");
    Ok(())
}
