//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::AppConfig;
use crate::http::{AppState, HttpServer};
use crate::lifecycle::shutdown::Shutdown;
use crate::net::{BoundListener, ListenerError};
use crate::observability::metrics;

/// Errors that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{0}")]
    Listener(#[from] ListenerError),

    #[error("server: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start every subsystem and serve until shutdown.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind = %config.listener.port,
        host = %config.listener.host,
        request_timeout_secs = config.timeouts.request_secs,
        access_log = config.observability.access_log,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let state = AppState::default();
    let listener = BoundListener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, state);
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
