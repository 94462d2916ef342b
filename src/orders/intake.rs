//! Order creation.

use serde_json::Value;

use crate::observability::metrics;
use crate::orders::store::OrderStore;
use crate::orders::types::{NewOrder, Order};
use crate::orders::validation::PayloadError;

/// Validate `payload` and, if it holds up, append it to `store`.
///
/// A rejected payload leaves the store untouched.
pub fn create_order(store: &dyn OrderStore, payload: &Value) -> Result<Order, PayloadError> {
    let new_order = match NewOrder::from_payload(payload) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(reason = %e, "Rejected order payload");
            metrics::record_order_rejected();
            return Err(e);
        }
    };

    let order = store.append(new_order);
    metrics::record_order_created();

    tracing::info!(
        order_id = order.id,
        item_count = order.items.len(),
        "Order accepted"
    );
    Ok(order)
}
