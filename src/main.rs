use anyhow::Result;
use call_console::{create_router, AppState, CallRegistry, CaptureLayer, Config, LogStore};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Management console for the call-handling bot
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file, without extension
    #[arg(long, default_value = "config/call-console")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    // The log store must exist before the subscriber so the capture layer
    // sees every event from startup onward.
    let logs = Arc::new(LogStore::new(cfg.logs.capacity));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(CaptureLayer::new(Arc::clone(&logs)))
        .init();

    info!("{} v0.1.0", cfg.service.name);
    info!("Log store capacity: {} entries", logs.capacity());

    let registry = Arc::new(CallRegistry::new());
    let state = AppState::new(registry, logs, cfg.service.public_base_url.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
