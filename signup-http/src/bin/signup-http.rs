use clap::Parser;
use signup_core::RegistryConfig;
use signup_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Activity sign-up HTTP API server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SIGNUP_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "SIGNUP_PORT")]
    port: u16,

    /// Directory with the landing page assets
    #[arg(long, default_value = "static", env = "SIGNUP_STATIC_DIR")]
    static_dir: PathBuf,

    /// Registry seed file (JSON); the built-in catalogue is used when omitted
    #[arg(short, long, env = "SIGNUP_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    signup_http::init_tracing(&cli.log_level);

    let registry_config = match &cli.config {
        Some(file) => {
            tracing::info!("Loading registry seed from {}", file.display());
            Some(RegistryConfig::from_file(file)?)
        }
        None => None,
    };

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        static_dir: cli.static_dir,
        registry_config,
    };

    signup_http::start_with_config(config).await
}
