//! Order intake subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/orders (JSON body)
//!     → validation.rs (payload → NewOrder or PayloadError)
//!     → store.rs (assign id, stamp time, append)
//!     → Order (201)
//! ```
//!
//! # Design Decisions
//! - The store is owned by the application state and injected, never global
//! - Ids are assigned inside the store's critical section
//! - `pending` is the only status; nothing transitions an order

pub mod intake;
pub mod store;
pub mod types;
pub mod validation;

pub use intake::create_order;
pub use store::{InMemoryOrderStore, OrderStore};
pub use types::{NewOrder, Order, OrderStatus};
pub use validation::PayloadError;
