//! FleetDB Server Binary
//!
//! Loads the catalog and serves the HTTP API.

use std::sync::Arc;

use clap::Parser;
use fleetdb::network::Server;
use fleetdb::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// FleetDB Server
#[derive(Parser, Debug)]
#[command(name = "fleetdb-server")]
#[command(about = "In-memory vehicle catalog over HTTP")]
#[command(version)]
struct Args {
    /// JSON file with the initial vehicles
    #[arg(short, long, default_value = "vehicles.json")]
    data_file: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fleetdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("FleetDB Server v{}", fleetdb::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .listen_addr(&args.listen)
        .build();

    // Load catalog
    let engine = match Engine::open(&config) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
