//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port or socket path)
//!     → listener.rs (bind, classify errors)
//!     → BoundListener
//!     → Hand off to HTTP layer
//! ```

pub mod listener;

pub use listener::{BoundListener, ListenerError};
