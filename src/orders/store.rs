//! Order storage.
//!
//! Orders live for the lifetime of the process. The store is the only place
//! ids are assigned: `id = count + 1`, computed under the same lock as the
//! append so concurrent requests never share an id.

use std::fmt::Debug;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use crate::orders::types::{NewOrder, Order, OrderStatus};

/// Append-only order storage.
pub trait OrderStore: Send + Sync + Debug {
    /// Store a validated order and return the created record.
    fn append(&self, order: NewOrder) -> Order;

    /// Number of orders accepted so far.
    fn count(&self) -> usize;

    /// Every order in acceptance order.
    fn list(&self) -> Vec<Order>;
}

/// Process-local order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn append(&self, order: NewOrder) -> Order {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);

        let created = Order {
            id: orders.len() as u64 + 1,
            customer: order.customer,
            items: order.items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        orders.push(created.clone());
        created
    }

    fn count(&self) -> usize {
        self.orders.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn list(&self) -> Vec<Order> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
