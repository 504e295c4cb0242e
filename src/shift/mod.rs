//! Shifts and their tasks: the scheduling core of the roster.
//!
//! A shift is a dated time window owning an ordered set of tasks; each task
//! assigns an executor (and optionally a robot and transport) to a window
//! within the shift. This module carries the enrichment pipeline that joins
//! display names onto tasks, the shift composer, and the temporal queries
//! ("on date", "in range", "active now"). Layout follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
