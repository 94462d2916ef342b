//! Shared utilities for integration and load testing.

use std::net::{IpAddr, SocketAddr};

use restaurant_orders::config::{AppConfig, BindTarget};
use restaurant_orders::http::{AppState, HttpServer};
use restaurant_orders::lifecycle::Shutdown;
use restaurant_orders::net::BoundListener;

/// Test config listening on an ephemeral loopback port.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.host = IpAddr::from([127, 0, 0, 1]);
    config.listener.port = BindTarget::Port(0);
    config.observability.access_log = false;
    config
}

#[allow(dead_code)]
/// Start a server with fresh state. Keep the returned `Shutdown` alive for
/// as long as the server should run.
pub async fn start_server(config: AppConfig) -> (String, Shutdown) {
    let listener = BoundListener::bind(&config.listener).await.unwrap();
    let addr: SocketAddr = match &listener {
        BoundListener::Tcp(l) => l.local_addr().unwrap(),
        #[allow(unreachable_patterns)]
        _ => panic!("test servers listen on TCP"),
    };

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, AppState::default());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}
