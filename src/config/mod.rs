//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env (optional, never overrides the process environment)
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → loader.rs (environment overrides: PORT, APP_ENV)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, load_env_file, ConfigError, ENV_FILE};
pub use schema::{AppConfig, BindTarget, ListenerConfig, ObservabilityConfig, SecurityConfig};
