//! Landing gate server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 LANDING GATE                 │
//!                        │                                              │
//!   GET /                │  ┌────────────┐    Browser    ┌───────────┐  │
//!   ─────────────────────┼─▶│ classifier │──────────────▶│ renderer  │──┼──▶ 200 page
//!                        │  └─────┬──────┘               └───────────┘  │
//!                        │        │ NonBrowser                          │
//!                        │        ▼                                     │
//!                        │  ┌────────────┐               ┌───────────┐  │
//!                        │  │  resolver  │──────────────▶│  builder  │──┼──▶ 307 installer
//!                        │  │ (versions) │               └───────────┘  │
//!                        │  └────────────┘                              │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use landing_gate::config::ObservabilityConfig;
use landing_gate::http::HttpServer;
use landing_gate::lifecycle::{prepare, signals, Shutdown, StartupOptions};
use landing_gate::observability;
use landing_gate::render::LandingPage;

#[derive(Parser)]
#[command(name = "landing-gate")]
#[command(about = "Serve a landing page to browsers and an installer redirect to everything else", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON version manifest (newest first); overrides the config
    #[arg(long)]
    versions: Option<PathBuf>,

    /// Bind address; overrides the config
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let prepared = match prepare(&StartupOptions {
        config_path: cli.config,
        versions_path: cli.versions,
        bind_address: cli.bind,
    }) {
        Ok(p) => p,
        Err(e) => {
            observability::init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };
    let config = prepared.config;
    let versions = prepared.versions;

    observability::init_logging(&config.observability);

    tracing::info!("landing-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_host = %config.installer.base_host,
        tool = %config.installer.tool,
        entry_resource = %config.installer.entry_resource,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    tracing::info!(
        latest = versions.latest_version(),
        count = versions.len(),
        "Version list loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let renderer = LandingPage::new(config.page.clone());
    let server = HttpServer::new(config, versions, renderer);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
