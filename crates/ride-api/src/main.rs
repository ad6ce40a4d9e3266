//! Ride API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p ride-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use ride_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Pick the log format before anything else is logged
    let env = config.as_ref().map(|c| c.app.env).unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Ride API Server..."
    );

    if let Err(e) = ride_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
