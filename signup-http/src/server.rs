use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::Router;
use signup_core::{ActivityRegistry, RegistryConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Registry seed; the built-in catalogue when absent
    pub registry_config: Option<RegistryConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("static"),
            registry_config: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

/// Shared state handed to every handler
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: ActivityRegistry,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self { registry }
    }
}

/// Build the full application: API routes, static files, and middleware
pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router()
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server and run until ctrl-c
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let registry = ActivityRegistry::new(config.registry_config.clone().unwrap_or_default())
        .context("Failed to seed activity registry")?;
    info!(
        activities = registry.len(),
        enforce_capacity = registry.enforces_capacity(),
        "Initialized activity registry"
    );

    let app = create_app(AppState::new(registry), &config.static_dir);

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
