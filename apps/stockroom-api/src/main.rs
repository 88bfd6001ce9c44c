//! # Stockroom Server
//!
//! Entry point for the `stockroom` binary.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. tracing     RUST_LOG or the built-in filter                        │
//! │  2. config      defaults ◄── stockroom.toml ◄── STOCKROOM_* env vars   │
//! │  3. inventory   demo catalog or empty                                  │
//! │  4. listener    bind_addr:port                                         │
//! │  5. serve       until Ctrl+C / SIGTERM                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context;
use stockroom_api::{AppState, ServerConfig};
use stockroom_core::Inventory;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Stockroom API server...");

    let config_path = std::env::var_os("STOCKROOM_CONFIG").map(PathBuf::from);
    let config = ServerConfig::load(config_path).context("failed to load configuration")?;
    info!(
        bind = %config.bind_address(),
        seed_demo = config.catalog.seed_demo,
        "Configuration loaded"
    );

    let inventory = if config.catalog.seed_demo {
        Inventory::demo_catalog()
    } else {
        Inventory::new()
    };
    info!(items = inventory.len(), "Inventory ready");

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    stockroom_api::serve(listener, AppState::new(inventory), shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Installs the global tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,stockroom_core=debug,stockroom_api=debug,tower_http=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
