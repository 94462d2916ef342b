//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, security, timeouts, panics, metrics)
//! - Serve on a bound TCP or Unix listener until shutdown

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, middleware, Router};
use tokio::sync::broadcast;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::setup_api_router;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::http::request::request_id_layer;
use crate::http::response::{middleware_error, panic_response};
use crate::lifecycle::shutdown::wait_for_shutdown;
use crate::net::BoundListener;
use crate::observability::{metrics, tracing::http_trace_layer};
use crate::orders::{InMemoryOrderStore, OrderStore};
use crate::security;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, orders: Arc<dyn OrderStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            orders,
        }
    }
}

impl Default for AppState {
    /// Seeded catalog and an empty in-memory order store.
    fn default() -> Self {
        Self::new(Catalog::seeded(), Arc::new(InMemoryOrderStore::new()))
    }
}

/// HTTP server for the restaurant API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and state.
    pub fn new(config: AppConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let router = setup_api_router(state)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn(metrics::track_requests));
        let router = with_request_timeout(router, Duration::from_secs(config.timeouts.request_secs));

        let mut router = security::apply(router, &config.security);
        if config.observability.access_log {
            router = router.layer(http_trace_layer());
        }
        router.layer(request_id_layer())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    pub async fn run(
        self,
        listener: BoundListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        tracing::info!(
            address = %listener.describe(),
            "HTTP server starting"
        );

        match listener {
            BoundListener::Tcp(listener) => {
                axum::serve(listener, self.router)
                    .with_graceful_shutdown(wait_for_shutdown(shutdown))
                    .await?
            }
            #[cfg(unix)]
            BoundListener::Unix(listener) => {
                axum::serve(listener, self.router)
                    .with_graceful_shutdown(wait_for_shutdown(shutdown))
                    .await?
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Bound every request by `timeout`; an elapsed request is answered with a
/// JSON 408.
fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}
