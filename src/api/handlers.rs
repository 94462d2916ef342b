use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::payload::OrderPayload;
use crate::catalog::Restaurant;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::orders::{self, Order};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

pub async fn list_restaurants(State(state): State<AppState>) -> Json<Vec<Restaurant>> {
    Json(state.catalog.list().to_vec())
}

pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>, ApiError> {
    state
        .catalog
        .lookup(&id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiError::resource_not_found)
}

pub async fn create_order(
    State(state): State<AppState>,
    OrderPayload(payload): OrderPayload,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = orders::create_order(state.orders.as_ref(), &payload)?;
    Ok((StatusCode::CREATED, Json(order)))
}
