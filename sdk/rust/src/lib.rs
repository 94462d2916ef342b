//! Async client for the restaurant ordering API.

pub mod client;

pub use client::{ClientError, CreateOrder, Order, OrdersClient, Restaurant};
