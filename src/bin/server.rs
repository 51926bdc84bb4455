//! Postbox Server Binary
//!
//! Starts the HTTP server for Postbox.

use std::sync::Arc;
use clap::Parser;
use postbox::{Config, Engine};
use postbox::network::Server;
use tracing_subscriber::{fmt, EnvFilter};

/// Postbox Server
#[derive(Parser, Debug)]
#[command(name = "postbox-server")]
#[command(about = "In-memory post store with an HTTP API")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:5002")]
    listen: String,

    /// Start with an empty store instead of the example posts
    #[arg(long)]
    no_seed: bool,

    /// Maximum request body size in KiB
    #[arg(short = 'b', long, default_value = "64")]
    max_body_kb: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,postbox=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Postbox Server v{}", postbox::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let max_body_bytes = match Config::body_limit_from_kib(args.max_body_kb) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .seed_posts(!args.no_seed)
        .max_body_bytes(max_body_bytes)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let engine = Arc::new(Engine::new(config.clone()));
    tracing::info!("Engine initialized with {} posts", engine.store().len());

    // Start server (returns after Ctrl+C)
    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
