//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics → State → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal or trigger → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal (exit status 1)
//! - Listener binds last, after every subsystem is ready

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
