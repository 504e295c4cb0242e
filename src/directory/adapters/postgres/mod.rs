//! `PostgreSQL` adapters for roster reference data.

mod models;
mod repository;
mod schema;

pub use repository::{
    DirectoryPgPool, PostgresCrewRepository, PostgresEmployeeRepository, PostgresRobotRepository,
    PostgresTransportRepository,
};
