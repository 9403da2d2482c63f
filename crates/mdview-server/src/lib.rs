//! HTTP server for the mdview editor.
//!
//! Serves a two-pane page: a markdown editor on one side and the rendered,
//! sanitized preview on the other. The browser posts the editor text to the
//! render API on every change and swaps the preview with the response.
//!
//! # Quick Start
//!
//! ```ignore
//! use mdview_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (mdview-server)
//!                        │
//!                        ├─► GET /             editor page, pre-rendered preview
//!                        │
//!                        ├─► POST /api/render  ──► Pipeline::render_safe
//!                        │
//!                        └─► GET /assets/*     script and stylesheet
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod page;
mod state;
mod view;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use mdview_pipeline::{Pipeline, PipelineConfig};

pub use error::ServerError;
pub use view::ViewState;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Rendering pipeline configuration.
    pub pipeline: PipelineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            pipeline: PipelineConfig::default(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        pipeline: Pipeline::new(&config.pipeline),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
