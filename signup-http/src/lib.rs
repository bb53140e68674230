//! Activity sign-up HTTP API server
//!
//! This crate exposes the activity registry over HTTP/JSON.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer())
        .try_init();
}

/// Start the server with a custom configuration. Tracing must already be set up.
pub async fn start_with_config(config: ServerConfig) -> anyhow::Result<()> {
    start_server(config).await
}
