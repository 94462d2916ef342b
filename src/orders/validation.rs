//! Order payload validation.
//!
//! # Responsibilities
//! - Turn an untyped JSON body into a `NewOrder`
//! - Name the exact rule a rejected payload broke
//!
//! # Rules
//! - `customer`: present, a string, not blank
//! - `items`: present, an array, at least one element, every element a string

use serde_json::Value;
use thiserror::Error;

use crate::orders::types::NewOrder;

/// Why an order payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("customer is missing")]
    MissingCustomer,

    #[error("customer must be a string")]
    CustomerNotString,

    #[error("customer must not be blank")]
    BlankCustomer,

    #[error("items is missing")]
    MissingItems,

    #[error("items must be an array")]
    ItemsNotArray,

    #[error("items must contain at least one entry")]
    EmptyItems,

    #[error("items[{index}] must be a string")]
    ItemNotString { index: usize },
}

impl NewOrder {
    /// Validate a decoded request body.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let fields = payload.as_object().ok_or(PayloadError::NotAnObject)?;

        let customer = match fields.get("customer") {
            None | Some(Value::Null) => return Err(PayloadError::MissingCustomer),
            Some(Value::String(s)) if s.trim().is_empty() => return Err(PayloadError::BlankCustomer),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(PayloadError::CustomerNotString),
        };

        let raw_items = match fields.get("items") {
            None | Some(Value::Null) => return Err(PayloadError::MissingItems),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(PayloadError::ItemsNotArray),
        };
        if raw_items.is_empty() {
            return Err(PayloadError::EmptyItems);
        }

        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(PayloadError::ItemNotString { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { customer, items })
    }
}
