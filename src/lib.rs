//! Rostrum: shift roster and scheduling core.
//!
//! This crate implements the scheduling backend for field operators,
//! delivery robots, and transport assets: reference-data management,
//! shift/task composition with denormalized display fields, and the
//! temporal queries ("on date", "in range", "active now") the planning
//! frontends rely on.
//!
//! # Architecture
//!
//! Rostrum follows hexagonal architecture principles:
//!
//! - **Domain**: Pure records and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract repository traits for the entity store
//! - **Adapters**: Concrete port implementations (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`directory`]: Employees, transports, robots, and crews
//! - [`shift`]: Shifts and tasks, enrichment, and temporal queries
//! - [`tickets`]: Ticket-reference extraction from GeoJSON payloads

pub mod directory;
pub mod shift;
pub mod tickets;
