//! # Stockroom API
//!
//! HTTP/JSON front for the stockroom-core inventory store.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  TcpListener ──► axum::serve ──► TraceLayer ──► Router ──► handler      │
//! │                                                              │          │
//! │                               Arc<AppState>                  │          │
//! │                     ┌─────────────────────────────┐          │          │
//! │                     │  RwLock<Inventory>  ◄───────┼──────────┘          │
//! │                     │  started_at                 │                     │
//! │                     └─────────────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary in `main.rs` only wires config, tracing and signals around
//! [`serve`]; integration tests call [`serve`] directly on an ephemeral port.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use stockroom_core::Inventory;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};

/// State shared by every handler.
pub struct AppState {
    /// The one inventory this process serves.
    pub inventory: RwLock<Inventory>,

    /// When the process started serving.
    pub started_at: DateTime<Utc>,
}

/// Handle passed to handlers through axum's `State` extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Wraps an inventory for sharing across handlers.
    pub fn new(inventory: Inventory) -> SharedState {
        Arc::new(AppState {
            inventory: RwLock::new(inventory),
            started_at: Utc::now(),
        })
    }
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::router(state);

    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Stockroom API listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
