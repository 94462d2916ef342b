//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lenient;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where to listen.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Response headers, CORS and body limits.
    pub security: SecurityConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind TCP ports on.
    pub host: IpAddr,

    /// Port number, or a socket path when not numeric.
    pub port: BindTarget,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: BindTarget::Port(5000),
        }
    }
}

/// What the listener binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "PortValue", into = "String")]
pub enum BindTarget {
    /// TCP port on `listener.host`.
    Port(u16),
    /// Local socket path.
    Pipe(PathBuf),
}

/// Why a port value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("port value is empty")]
    Empty,

    #[error("port {0} is outside 0-65535")]
    OutOfRange(i64),
}

impl FromStr for BindTarget {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(PortError::Empty);
        }

        // Leading digits make it a port ("8080abc" is 8080); otherwise a path.
        match lenient::parse_int(value) {
            Some(n) => u16::try_from(n)
                .map(BindTarget::Port)
                .map_err(|_| PortError::OutOfRange(n)),
            None => Ok(BindTarget::Pipe(PathBuf::from(value))),
        }
    }
}

impl fmt::Display for BindTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindTarget::Port(port) => write!(f, "Port {}", port),
            BindTarget::Pipe(path) => write!(f, "Pipe {}", path.display()),
        }
    }
}

impl From<BindTarget> for String {
    fn from(target: BindTarget) -> Self {
        match target {
            BindTarget::Port(port) => port.to_string(),
            BindTarget::Pipe(path) => path.display().to_string(),
        }
    }
}

/// Raw port as written in a config file: a TOML integer or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(i64),
    Text(String),
}

impl TryFrom<PortValue> for BindTarget {
    type Error = PortError;

    fn try_from(value: PortValue) -> Result<Self, Self::Error> {
        match value {
            PortValue::Number(n) => u16::try_from(n)
                .map(BindTarget::Port)
                .map_err(|_| PortError::OutOfRange(n)),
            PortValue::Text(s) => s.parse(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add hardening response headers.
    pub enable_headers: bool,
    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            cors_enabled: true,
            max_body_size: 100 * 1024, // 100KB
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Emit one span per request.
    pub access_log: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            access_log: true,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_target_parse() {
        assert_eq!("5000".parse::<BindTarget>(), Ok(BindTarget::Port(5000)));
        assert_eq!(" 0 ".parse::<BindTarget>(), Ok(BindTarget::Port(0)));
        assert_eq!(
            "/tmp/orders.sock".parse::<BindTarget>(),
            Ok(BindTarget::Pipe(PathBuf::from("/tmp/orders.sock")))
        );
        assert_eq!("-1".parse::<BindTarget>(), Err(PortError::OutOfRange(-1)));
        assert_eq!("70000".parse::<BindTarget>(), Err(PortError::OutOfRange(70000)));
        assert_eq!("".parse::<BindTarget>(), Err(PortError::Empty));
    }

    #[test]
    fn test_bind_target_leading_digits() {
        assert_eq!("8080abc".parse::<BindTarget>(), Ok(BindTarget::Port(8080)));
        assert_eq!("3000.5".parse::<BindTarget>(), Ok(BindTarget::Port(3000)));
        assert_eq!("-1abc".parse::<BindTarget>(), Err(PortError::OutOfRange(-1)));
        assert_eq!(
            "orders.sock".parse::<BindTarget>(),
            Ok(BindTarget::Pipe(PathBuf::from("orders.sock")))
        );
    }

    #[test]
    fn test_bind_target_display() {
        assert_eq!(BindTarget::Port(5000).to_string(), "Port 5000");
        assert_eq!(
            BindTarget::Pipe(PathBuf::from("/tmp/a.sock")).to_string(),
            "Pipe /tmp/a.sock"
        );
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listener.port, BindTarget::Port(5000));
        assert_eq!(config.security.max_body_size, 102_400);
        assert!(config.observability.access_log);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_toml_port_forms() {
        let config: AppConfig = toml::from_str("[listener]\nport = 8080\n").unwrap();
        assert_eq!(config.listener.port, BindTarget::Port(8080));

        let config: AppConfig = toml::from_str("[listener]\nport = \"/run/orders.sock\"\n").unwrap();
        assert_eq!(config.listener.port, BindTarget::Pipe(PathBuf::from("/run/orders.sock")));

        assert!(toml::from_str::<AppConfig>("[listener]\nport = -5\n").is_err());
    }

    #[test]
    fn test_toml_host_must_be_ip() {
        let config: AppConfig = toml::from_str("[listener]\nhost = \"127.0.0.1\"\n").unwrap();
        assert_eq!(config.listener.host, IpAddr::from([127, 0, 0, 1]));

        assert!(toml::from_str::<AppConfig>("[listener]\nhost = \"localhost:80\"\n").is_err());
    }
}
