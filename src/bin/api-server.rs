//! Optrix API Server
//!
//! Serves the signal engine over HTTP: predictions, accuracy feedback,
//! statistics, health and Prometheus metrics. Engine state is in-memory and
//! per process.

use dotenvy::dotenv;
use optrix::config::Config;
use optrix::core::http::start_server;
use optrix::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    info!("Starting Optrix API Server");
    info!(environment = %config.environment, "Environment");
    info!(address = %config.bind_address(), "HTTP Server");
    info!(
        volatility_gate_vix = config.engine.volatility_gate_vix,
        history_capacity = config.engine.history_capacity,
        "Engine configuration"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
