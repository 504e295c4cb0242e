//! Port contracts for roster reference data.

mod repository;

pub use repository::{
    CrewRepository, DirectoryStoreError, DirectoryStoreResult, EmployeeFilter,
    EmployeeRepository, Page, RobotRepository, TransportRepository,
};
