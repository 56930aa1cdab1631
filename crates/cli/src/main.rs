use clap::{Parser, Subcommand};
use dnscache_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "dnscache")]
#[command(version)]
#[command(about = "dnscache - caching front for the system host resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve hosts through the cache
    Lookup {
        #[arg(required = true)]
        hosts: Vec<String>,

        /// Number of lookups per host
        #[arg(short = 'n', long, default_value_t = 1)]
        repeat: u32,
    },

    /// Warm the cache and keep it refreshed until interrupted
    Watch {
        #[arg(required = true)]
        hosts: Vec<String>,

        /// Seconds between refresh passes
        #[arg(short = 'i', long)]
        interval: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let interval_override = match &cli.command {
        Command::Watch { interval, .. } => *interval,
        Command::Lookup { .. } => None,
    };
    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        refresh_interval_secs: interval_override,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnscache v{}", env!("CARGO_PKG_VERSION"));

    let services = di::CacheServices::new(&config);

    match cli.command {
        Command::Lookup { hosts, repeat } => {
            commands::lookup(&services, &hosts, repeat).await;
        }
        Command::Watch { hosts, .. } => {
            commands::watch(&services, &config, &hosts).await?;
        }
    }

    Ok(())
}
