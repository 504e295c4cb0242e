//! Unit tests for the scheduling core.
//!
//! Tests are organised by layer: pure domain behaviour (kind parsing,
//! validation rules, window membership), the enrichment and composition
//! pipeline, the temporal queries with a pinned clock, and the CRUD
//! service over the in-memory adapters.

mod domain_tests;
mod enrichment_tests;
mod scheduling_tests;

use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp for test data.
pub(crate) fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid timestamp")
}
