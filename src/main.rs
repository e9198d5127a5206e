//! Anagram finder service.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────────┐
//!                       │                   ANAGRAM FINDER                      │
//!                       │                                                       │
//!   POST /anagram       │  ┌─────────┐    ┌──────────┐    ┌────────────────┐   │
//!   ────────────────────┼─▶│  http   │───▶│ request  │───▶│ SourceFactory  │   │
//!   (json | multipart)  │  │ server  │    │ parsing  │    │  → WordSource  │◀──┼──── remote
//!                       │  └─────────┘    └──────────┘    └───────┬────────┘   │     word list
//!                       │                                         │ words      │
//!                       │                                         ▼            │
//!   JSON groups         │  ┌─────────┐                    ┌────────────────┐   │
//!   ◀───────────────────┼──│response │◀───────────────────│ GrouperFactory │   │
//!                       │  │ mapping │      groups        │ → SortAndGroup │   │
//!                       │  └─────────┘                    └────────────────┘   │
//!                       │                                                       │
//!                       │   config · observability · lifecycle (cross-cutting)  │
//!                       └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use anagram_finder::config::{load_config, validate_config, AppConfig};
use anagram_finder::http::HttpServer;
use anagram_finder::lifecycle::{signals, Shutdown};
use anagram_finder::observability;

#[derive(Parser, Debug)]
#[command(name = "anagram-finder")]
#[command(about = "HTTP service that groups word lists into anagram sets", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "ANAGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(|errors| {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })?;
    }

    observability::init_tracing(&config.observability)?;

    tracing::info!("anagram-finder v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        remote_timeout_secs = config.remote.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
