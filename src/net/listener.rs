//! Listener binding.
//!
//! # Responsibilities
//! - Bind the configured target (TCP port or local socket path)
//! - Classify bind failures into messages an operator can act on
//!
//! # Design Decisions
//! - Binding failure is fatal; there is nothing to serve without a listener
//! - Socket paths are Unix domain sockets; other platforms reject them

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::net::UnixListener;

use crate::config::{BindTarget, ListenerConfig};

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// The OS refused the bind for lack of privileges.
    PermissionDenied(BindTarget),
    /// Something else already listens there.
    AddrInUse(BindTarget),
    /// Socket paths are unavailable on this platform.
    Unsupported(BindTarget),
    /// Any other bind failure.
    Bind(BindTarget, io::Error),
}

impl ListenerError {
    fn from_io(target: &BindTarget, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => ListenerError::PermissionDenied(target.clone()),
            io::ErrorKind::AddrInUse => ListenerError::AddrInUse(target.clone()),
            _ => ListenerError::Bind(target.clone(), e),
        }
    }
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::PermissionDenied(t) => write!(f, "{} requires elevated privileges", t),
            ListenerError::AddrInUse(t) => write!(f, "{} is already in use", t),
            ListenerError::Unsupported(t) => write!(f, "{} is not supported on this platform", t),
            ListenerError::Bind(t, e) => write!(f, "Failed to bind {}: {}", t, e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// A listener ready to hand to the HTTP server.
#[derive(Debug)]
pub enum BoundListener {
    Tcp(TcpListener),
    #[cfg(unix)]
    Unix(UnixListener),
}

impl BoundListener {
    /// Bind according to the listener configuration.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        match &config.port {
            BindTarget::Port(port) => {
                let listener = TcpListener::bind(SocketAddr::new(config.host, *port))
                    .await
                    .map_err(|e| ListenerError::from_io(&config.port, e))?;

                if let Ok(addr) = listener.local_addr() {
                    tracing::info!(address = %addr, "Listener bound");
                }
                Ok(BoundListener::Tcp(listener))
            }
            #[cfg(unix)]
            BindTarget::Pipe(path) => {
                let listener = UnixListener::bind(path)
                    .map_err(|e| ListenerError::from_io(&config.port, e))?;

                tracing::info!(path = %path.display(), "Listener bound");
                Ok(BoundListener::Unix(listener))
            }
            #[cfg(not(unix))]
            BindTarget::Pipe(_) => Err(ListenerError::Unsupported(config.port.clone())),
        }
    }

    /// Human-readable description of where the listener is bound.
    pub fn describe(&self) -> String {
        match self {
            BoundListener::Tcp(l) => l
                .local_addr()
                .map(|a| a.to_string())
                .unwrap_or_else(|_| "unknown".to_string()),
            #[cfg(unix)]
            BoundListener::Unix(l) => l
                .local_addr()
                .ok()
                .and_then(|a| a.as_pathname().map(|p| p.display().to_string()))
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    fn tcp_config(port: u16) -> ListenerConfig {
        ListenerConfig {
            host: IpAddr::from([127, 0, 0, 1]),
            port: BindTarget::Port(port),
        }
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = BoundListener::bind(&tcp_config(0)).await.unwrap();
        assert!(listener.describe().starts_with("127.0.0.1:"));
    }

    #[tokio::test]
    async fn test_addr_in_use() {
        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = first.local_addr().unwrap().port();

        let err = BoundListener::bind(&tcp_config(port)).await.unwrap_err();
        assert!(matches!(err, ListenerError::AddrInUse(_)));
        assert_eq!(err.to_string(), format!("Port {} is already in use", port));
    }

    #[test]
    fn test_permission_denied_message() {
        let err = ListenerError::from_io(
            &BindTarget::Port(80),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "Port 80 requires elevated privileges");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bind_socket_path() {
        let path = std::env::temp_dir().join(format!("restaurant-orders-{}.sock", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = ListenerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: BindTarget::Pipe(path.clone()),
        };
        let listener = BoundListener::bind(&config).await.unwrap();
        assert_eq!(listener.describe(), path.display().to_string());

        drop(listener);
        let _ = std::fs::remove_file(&path);
    }
}
