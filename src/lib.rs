//! Restaurant ordering API library.

pub mod api;
pub mod catalog;
pub mod config;
pub mod http;
pub mod lenient;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod orders;
pub mod security;

pub use config::schema::AppConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
