//! Restaurant catalog.
//!
//! # Data Flow
//! ```text
//! startup
//!     → restaurant.rs (seed records)
//!     → Catalog (immutable, shared via Arc)
//!
//! GET /api/restaurants[/:id]
//!     → Catalog::list / Catalog::lookup
//! ```
//!
//! # Design Decisions
//! - Seed data is fixed at startup and never mutated
//! - Lookup is a linear scan; the set is tiny
//! - An id that does not parse matches nothing instead of raising a parse error

pub mod restaurant;

pub use restaurant::{Catalog, Restaurant};
