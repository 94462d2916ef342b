//! Restaurant records and the read-only catalog holding them.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A restaurant as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
}

impl Restaurant {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Immutable, ordered set of restaurants.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog from an explicit list, preserving order.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// The records every process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Restaurant::new(1, "Pasta Palace"),
            Restaurant::new(2, "Curry Corner"),
        ])
    }

    /// All restaurants in insertion order.
    pub fn list(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// First restaurant with the given id.
    pub fn get(&self, id: u64) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Resolve a raw path segment to a restaurant.
    ///
    /// The segment is read the way a lenient integer parser would: leading
    /// whitespace and an optional sign, then the leading run of digits.
    /// Anything without digits, or a negative number, matches nothing.
    pub fn lookup(&self, raw: &str) -> Option<&Restaurant> {
        lenient::parse_int(raw)
            .and_then(|id| u64::try_from(id).ok())
            .and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
