//! Startup failure modes.

use std::net::TcpListener;

use restaurant_orders::config::BindTarget;
use restaurant_orders::lifecycle::startup::{self, StartupError};
use restaurant_orders::net::ListenerError;

mod common;

#[tokio::test]
async fn test_port_in_use_is_fatal() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let mut config = common::test_config();
    config.listener.port = BindTarget::Port(port);

    let err = startup::run(config).await.unwrap_err();
    assert!(matches!(err, StartupError::Listener(ListenerError::AddrInUse(_))));
    assert_eq!(err.to_string(), format!("Port {} is already in use", port));
}
