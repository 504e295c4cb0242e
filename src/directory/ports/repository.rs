//! Repository ports for employees, transports, robots, and crews.
//!
//! All contracts share the same shape: `create` assigns the id and
//! timestamps, `update` applies a merge-patch and returns `None` for a
//! missing id, `delete` reports success as a flag. Absence is never an
//! error; the error type covers persistence failure and store-enforced
//! uniqueness only.

use crate::directory::domain::{
    Crew, CrewId, CrewPatch, Employee, EmployeeId, EmployeePatch, NewCrew, NewEmployee, NewRobot,
    NewTransport, Robot, RobotId, RobotPatch, Transport, TransportId, TransportPatch,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryStoreResult<T> = Result<T, DirectoryStoreError>;

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryStoreError {
    /// A robot with the same business number already exists.
    #[error("duplicate robot number: {0}")]
    DuplicateRobotNumber(i64),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Stable pagination window over an id-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of leading records to skip.
    pub offset: i64,
    /// Maximum number of records to return.
    pub limit: i64,
}

impl Page {
    /// Creates a pagination window.
    #[must_use]
    pub const fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Window covering every record, used by internal full scans.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: i64::MAX,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
        }
    }
}

/// Optional predicates for employee listings; `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive substring match on the body tag.
    pub body: Option<String>,
    /// Exact crew membership.
    pub crew: Option<CrewId>,
    /// Parking permit flag.
    pub parking: Option<bool>,
    /// Drive licence flag.
    pub drive: Option<bool>,
    /// Telemedicine check flag.
    pub telemedicine: Option<bool>,
    /// Auto-VC access flag.
    pub auto_vc_access: Option<bool>,
}

impl EmployeeFilter {
    /// Returns `true` when the employee satisfies every set predicate.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        let body_ok = self.body.as_ref().is_none_or(|needle| {
            employee
                .body
                .as_ref()
                .is_some_and(|body| body.to_lowercase().contains(&needle.to_lowercase()))
        });
        body_ok
            && self.crew.is_none_or(|crew| employee.crew == Some(crew))
            && self.parking.is_none_or(|flag| employee.parking == flag)
            && self.drive.is_none_or(|flag| employee.drive == flag)
            && self
                .telemedicine
                .is_none_or(|flag| employee.telemedicine == flag)
            && self
                .auto_vc_access
                .is_none_or(|flag| employee.auto_vc_access == flag)
    }
}

/// Employee persistence contract.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee, assigning the id and timestamps.
    async fn create(&self, new: NewEmployee) -> DirectoryStoreResult<Employee>;

    /// Finds an employee by id; `None` when absent.
    async fn find_by_id(&self, id: EmployeeId) -> DirectoryStoreResult<Option<Employee>>;

    /// Lists employees in id order within the page, filtered by predicates.
    async fn list(&self, page: Page, filter: &EmployeeFilter) -> DirectoryStoreResult<Vec<Employee>>;

    /// Returns every employee assigned to the crew, in id order.
    async fn find_by_crew(&self, crew: CrewId) -> DirectoryStoreResult<Vec<Employee>>;

    /// Applies a merge-patch; `None` when the id is absent.
    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> DirectoryStoreResult<Option<Employee>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: EmployeeId) -> DirectoryStoreResult<bool>;
}

/// Transport persistence contract.
#[async_trait]
pub trait TransportRepository: Send + Sync {
    /// Stores a new transport asset, assigning the id and timestamps.
    async fn create(&self, new: NewTransport) -> DirectoryStoreResult<Transport>;

    /// Finds a transport by id; `None` when absent.
    async fn find_by_id(&self, id: TransportId) -> DirectoryStoreResult<Option<Transport>>;

    /// Lists transports in id order within the page.
    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Transport>>;

    /// Applies a merge-patch; `None` when the id is absent.
    async fn update(
        &self,
        id: TransportId,
        patch: TransportPatch,
    ) -> DirectoryStoreResult<Option<Transport>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: TransportId) -> DirectoryStoreResult<bool>;
}

/// Robot persistence contract.
#[async_trait]
pub trait RobotRepository: Send + Sync {
    /// Stores a new robot, assigning the id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryStoreError::DuplicateRobotNumber`] when another
    /// robot already carries the business number.
    async fn create(&self, new: NewRobot) -> DirectoryStoreResult<Robot>;

    /// Finds a robot by store id; `None` when absent.
    async fn find_by_id(&self, id: RobotId) -> DirectoryStoreResult<Option<Robot>>;

    /// Lists robots in id order within the page.
    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Robot>>;

    /// Applies a merge-patch; `None` when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryStoreError::DuplicateRobotNumber`] when the patch
    /// would collide with another robot's business number.
    async fn update(&self, id: RobotId, patch: RobotPatch) -> DirectoryStoreResult<Option<Robot>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: RobotId) -> DirectoryStoreResult<bool>;
}

/// Crew persistence contract.
#[async_trait]
pub trait CrewRepository: Send + Sync {
    /// Stores a new crew, assigning the id and timestamps.
    async fn create(&self, new: NewCrew) -> DirectoryStoreResult<Crew>;

    /// Finds a crew by id; `None` when absent.
    async fn find_by_id(&self, id: CrewId) -> DirectoryStoreResult<Option<Crew>>;

    /// Lists crews in id order within the page.
    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Crew>>;

    /// Applies a merge-patch; `None` when the id is absent.
    async fn update(&self, id: CrewId, patch: CrewPatch) -> DirectoryStoreResult<Option<Crew>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: CrewId) -> DirectoryStoreResult<bool>;
}
