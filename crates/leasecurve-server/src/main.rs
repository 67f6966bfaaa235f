//! Leasecurve server entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leasecurve_cache::{CurveCache, RefreshWorker};
use leasecurve_feed::TreasuryClient;
use leasecurve_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,leasecurve=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Leasecurve server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/leasecurve.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Durable cache; a missing or corrupt snapshot starts empty and the
    // first refresh cycle fills it.
    let cache = Arc::new(CurveCache::open(&config.snapshot_path));

    // Background refresh against the upstream publisher. The worker handle
    // lives until the server future resolves.
    let source = Arc::new(TreasuryClient::with_base_url(config.feed_url.as_str()));
    let worker = RefreshWorker::start(
        cache.clone(),
        source,
        Duration::from_secs(config.refresh_interval_secs),
    );

    // Serve requests against whatever snapshot is resident.
    let server = Server::new(config, cache);
    let result = server.start().await;

    worker.stop();
    result?;

    Ok(())
}
