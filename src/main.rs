//! apprunner-demo entry point.
//!
//! Initializes tracing, resolves configuration from the environment, builds
//! the router and serves it until the process is killed. Failing to bind the
//! listener is fatal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apprunner_demo::config::DEFAULT_LOG_FILTER;
use apprunner_demo::http::start_server;
use apprunner_demo::{create_router, AppState, ServiceConfig};

/// Minimal HTTP service for AWS App Runner
#[derive(Parser, Debug)]
#[command(name = "apprunner-demo", version, about)]
struct Args {
    /// Log level filter (e.g., "apprunner_demo=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    let app = create_router(AppState::new(config.clone()));

    tracing::info!(
        port = %config.port,
        commit_sha = %config.commit_sha,
        "Starting server"
    );

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
