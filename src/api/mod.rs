//! REST API routes.
//!
//! | Method | Path                    | Handler            |
//! |--------|-------------------------|--------------------|
//! | GET    | `/health`               | `health`           |
//! | GET    | `/api/restaurants`      | `list_restaurants` |
//! | GET    | `/api/restaurants/{id}` | `get_restaurant`   |
//! | POST   | `/api/orders`           | `create_order`     |
//!
//! Order bodies may be JSON or URL-encoded forms (see [`payload`]).
//! Anything else, including a known path with the wrong method, is a 404.

pub mod handlers;
pub mod payload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::response::not_found;
use crate::http::server::AppState;
use self::handlers::*;

pub fn setup_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/restaurants", get(list_restaurants))
        .route("/api/restaurants/{id}", get(get_restaurant))
        .route("/api/orders", post(create_order))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}
