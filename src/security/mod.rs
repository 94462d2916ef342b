//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (answer preflights, allow any origin)
//!     → limits.rs (cap request body size)
//!     → Pass to routing
//! Outgoing response:
//!     → headers.rs (hardening headers)
//! ```
//!
//! # Design Decisions
//! - Each layer can be switched off in configuration
//! - No trust in client input

pub mod cors;
pub mod headers;
pub mod limits;

use axum::Router;

use crate::config::SecurityConfig;

/// Apply the configured security layers to `router`.
pub fn apply(router: Router, config: &SecurityConfig) -> Router {
    let mut router = router.layer(limits::body_limit(config));

    if config.enable_headers {
        router = headers::with_security_headers(router);
    }
    if config.cors_enabled {
        router = router.layer(cors::cors_layer());
    }
    router
}
