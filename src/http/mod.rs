//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! BoundListener (TCP or Unix socket)
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → api (route table, handlers)
//!     → response.rs (errors rendered as JSON)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_layer, MakeRequestUuid, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
