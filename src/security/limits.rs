//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size
//!
//! # Design Decisions
//! - Enforced by the body extractor, so oversize bodies surface as a
//!   413 through the same JSON error path as every other failure

use axum::extract::DefaultBodyLimit;

use crate::config::SecurityConfig;

/// Body size limit for JSON payloads.
pub fn body_limit(config: &SecurityConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_size)
}
