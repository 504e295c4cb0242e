//! Reference data for the roster: employees, transports, robots, and crews.
//!
//! These entities are managed by administrative CRUD and referenced (never
//! owned) by shift tasks. The module follows hexagonal architecture:
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
