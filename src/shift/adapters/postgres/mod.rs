//! `PostgreSQL` adapters for shift and task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresShiftRepository, PostgresTaskRepository, ShiftPgPool};
