//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, panic reports)
//!     → metrics.rs (request counters, latency histograms, order counters)
//!     → tracing.rs (per-request spans carrying the request ID)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; `RUST_LOG` wins over config
//! - Metric updates are no-ops until an exporter is installed
//! - Request ID is attached to every request span

pub mod logging;
pub mod metrics;
pub mod tracing;
