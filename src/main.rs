//! pdf-sidecar entry point.
//!
//! Parses `--host`/`--port`, initializes tracing, builds the router and serves
//! until SIGINT or SIGTERM. A signal-triggered shutdown exits with code 0.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_sidecar::config::{SidecarConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT};
use pdf_sidecar::http::start_server;
use pdf_sidecar::routes::create_router;
use pdf_sidecar::state::AppState;

/// pdf-sidecar: local health and PDF header inspection service
#[derive(Parser, Debug)]
#[command(name = "pdf-sidecar", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SidecarConfig::new(args.host, args.port);
    tracing::info!(addr = %config.display_addr(), "Starting sidecar");

    let app = create_router(AppState::default());
    start_server(&config, app).await?;

    Ok(())
}
