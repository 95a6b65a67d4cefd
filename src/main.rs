//! Dashboard host for the proxy server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                  ┌──────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http server ─▶ basic auth ─▶ handlers      │
//!                              │                                   │          │
//!                              │                                   ▼          │
//!                              │                         ┌────────────────┐   │
//!                              │   config ──startup──▶   │ route registry │   │
//!                              │                         │  (immutable)   │   │
//!                              │                         └────────────────┘   │
//!                              │   observability   lifecycle (signals)        │
//!                              └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use dashboard_routes::config::ObservabilityConfig;
use dashboard_routes::http::DashboardServer;
use dashboard_routes::lifecycle::{bootstrap, Shutdown};
use dashboard_routes::observability::init_logging;

#[derive(Parser)]
#[command(name = "dashboard-routes")]
#[command(about = "Route registry and host for the proxy dashboard", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard (default)
    Serve,
    /// Validate the config and route table, then exit
    Check,
    /// Print the route table
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, registry) = match bootstrap(cli.config.as_deref()) {
        Ok(booted) => booted,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    init_logging(&config.observability);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Check => {
            println!("ok: {} routes", registry.len());
        }
        Commands::List => {
            for entry in registry.list() {
                println!("{:<20} {:<16} {}", entry.path(), entry.name(), entry.view());
            }
        }
        Commands::Serve => {
            tracing::info!(
                bind_address = %config.listener.bind_address,
                routes = registry.len(),
                "dashboard-routes v{} starting",
                env!("CARGO_PKG_VERSION")
            );

            let listener = TcpListener::bind(&config.listener.bind_address).await?;

            let shutdown = Shutdown::new();
            let server_shutdown = shutdown.subscribe();
            tokio::spawn(shutdown.clone().trigger_on_signal());

            DashboardServer::new(config, registry)?
                .run(listener, server_shutdown)
                .await?;

            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
