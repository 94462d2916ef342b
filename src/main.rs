//! Restaurant ordering API
//!
//! A small REST service: a health check, a read-only restaurant catalog and
//! in-memory order intake, served with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶  net::listener ──▶ http::server ──▶ api (route table)
//!                      (TCP / Unix)      (middleware)       │
//!                                                           ├──▶ catalog (seed data)
//!                                                           └──▶ orders (validate, append)
//!     Client Response
//!     ◀──────────────  http::response (JSON body, errors as {"message": ...})
//!
//!     Cross-cutting: config, observability, security, lifecycle
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use restaurant_orders::config::{self, ObservabilityConfig};
use restaurant_orders::lifecycle::startup;
use restaurant_orders::observability::logging;

#[derive(Parser)]
#[command(name = "restaurant-orders")]
#[command(about = "Restaurant catalog and order intake API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Before reading PORT and friends.
    let env_file = config::load_env_file(Path::new(config::ENV_FILE));

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    logging::install_panic_hook();

    match env_file {
        Ok(true) => tracing::info!(path = config::ENV_FILE, "Loaded environment file"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring environment file"),
    }

    tracing::info!("restaurant-orders v{} starting", env!("CARGO_PKG_VERSION"));

    // Panics outside request handling surface here as a failed join.
    match tokio::spawn(startup::run(config)).await {
        Ok(Ok(())) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Server task aborted");
            ExitCode::FAILURE
        }
    }
}
