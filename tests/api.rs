//! End-to-end tests over a real socket.

use reqwest::StatusCode;
use sdk_rust::{CreateOrder, OrdersClient, Restaurant};
use serde_json::json;

mod common;

fn order(customer: &str, items: &[&str]) -> CreateOrder {
    CreateOrder {
        customer: customer.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_health() {
    let (url, shutdown) = common::start_server(common::test_config()).await;
    let client = OrdersClient::new(&url);

    assert_eq!(client.health().await.unwrap(), "ok");

    shutdown.trigger();
}

#[tokio::test]
async fn test_restaurant_lookup() {
    let (url, shutdown) = common::start_server(common::test_config()).await;
    let client = OrdersClient::new(&url);

    let all = client.list_restaurants().await.unwrap();
    assert_eq!(
        all,
        vec![
            Restaurant { id: 1, name: "Pasta Palace".into() },
            Restaurant { id: 2, name: "Curry Corner".into() },
        ]
    );

    let one = client.get_restaurant("1").await.unwrap();
    assert_eq!(one.name, "Pasta Palace");

    let err = client.get_restaurant("999").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "API returned 404 Not Found: Not found");

    shutdown.trigger();
}

#[tokio::test]
async fn test_orders_get_sequential_ids() {
    let (url, shutdown) = common::start_server(common::test_config()).await;
    let client = OrdersClient::new(&url);

    let mut ids = Vec::new();
    for customer in ["Ada", "Grace", "Linus"] {
        let created = client.create_order(&order(customer, &["Margherita"])).await.unwrap();
        assert_eq!(created.status, "pending");
        assert_eq!(created.customer, customer);
        assert!(created.created_at.ends_with('Z'));
        ids.push(created.id);
    }
    assert_eq!(ids, vec![1, 2, 3]);

    // Orders never change the catalog.
    assert_eq!(client.list_restaurants().await.unwrap().len(), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_orders_do_not_consume_ids() {
    let (url, shutdown) = common::start_server(common::test_config()).await;
    let client = OrdersClient::new(&url);

    for body in [
        json!({"items": ["Naan"]}),
        json!({"customer": "Ada", "items": []}),
        json!({"customer": "Ada", "items": "Naan"}),
        json!({"customer": "", "items": ["Naan"]}),
    ] {
        let err = client.create_order_raw(&body).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(err.to_string().ends_with("Invalid order payload"));
    }

    let created = client.create_order(&order("Ada", &["Naan"])).await.unwrap();
    assert_eq!(created.id, 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_route() {
    let (url, shutdown) = common::start_server(common::test_config()).await;

    let res = reqwest::get(format!("{}/api/nope", url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("x-request-id"));
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Not Found"}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let (url, shutdown) = common::start_server(common::test_config()).await;
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    assert!(client.get(format!("{}/health", url)).send().await.is_ok());

    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    assert!(client.get(format!("{}/health", url)).send().await.is_err());
}
