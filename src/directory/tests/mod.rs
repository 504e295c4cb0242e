//! Unit tests for roster reference data.
//!
//! Tests are organised by layer: pure domain behaviour (name composition,
//! merge-patch application, filters) and service orchestration over the
//! in-memory adapters.

mod service_tests;
