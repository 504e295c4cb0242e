//! Administrative CRUD over employees, transports, robots, and crews.
//!
//! Validation happens at this boundary, before any write: an employee may
//! only reference an existing crew, and robot business numbers stay unique.
//! Deletion never cascades; shift tasks that reference a removed entity
//! keep their raw ids and simply lose the denormalized display fields.

use crate::directory::{
    domain::{
        Crew, CrewId, CrewPatch, Employee, EmployeeId, EmployeePatch, NewCrew, NewEmployee,
        NewRobot, NewTransport, Robot, RobotId, RobotPatch, Transport, TransportId, TransportPatch,
    },
    ports::{
        CrewRepository, DirectoryStoreError, EmployeeFilter, EmployeeRepository, Page,
        RobotRepository, TransportRepository,
    },
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Coarse classification used by the transport layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested entity does not exist (404-equivalent).
    NotFound,
    /// The request was rejected before any write (400-equivalent).
    Validation,
    /// The store failed; details are logged, the caller sees a generic
    /// message (500-equivalent).
    Internal,
}

/// Errors surfaced by the directory service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No employee with the given id.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// No transport with the given id.
    #[error("transport not found: {0}")]
    TransportNotFound(TransportId),

    /// No robot with the given id.
    #[error("robot not found: {0}")]
    RobotNotFound(RobotId),

    /// No crew with the given id.
    #[error("crew not found: {0}")]
    CrewNotFound(CrewId),

    /// An employee payload referenced a crew that does not exist.
    #[error("unknown crew: {0}")]
    UnknownCrew(CrewId),

    /// A robot payload collided with an existing business number.
    #[error("duplicate robot number: {0}")]
    DuplicateRobotNumber(i64),

    /// Underlying store failure.
    #[error(transparent)]
    Store(DirectoryStoreError),
}

impl DirectoryError {
    /// Classifies the error for status-code mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmployeeNotFound(_)
            | Self::TransportNotFound(_)
            | Self::RobotNotFound(_)
            | Self::CrewNotFound(_) => ErrorKind::NotFound,
            Self::UnknownCrew(_) | Self::DuplicateRobotNumber(_) => ErrorKind::Validation,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}

impl From<DirectoryStoreError> for DirectoryError {
    fn from(err: DirectoryStoreError) -> Self {
        match err {
            DirectoryStoreError::DuplicateRobotNumber(number) => {
                Self::DuplicateRobotNumber(number)
            }
            other => Self::Store(other),
        }
    }
}

/// Administrative CRUD service over the four reference repositories.
#[derive(Clone)]
pub struct DirectoryService {
    employees: Arc<dyn EmployeeRepository>,
    transports: Arc<dyn TransportRepository>,
    robots: Arc<dyn RobotRepository>,
    crews: Arc<dyn CrewRepository>,
}

impl DirectoryService {
    /// Creates a directory service over the given repositories.
    #[must_use]
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        transports: Arc<dyn TransportRepository>,
        robots: Arc<dyn RobotRepository>,
        crews: Arc<dyn CrewRepository>,
    ) -> Self {
        Self {
            employees,
            transports,
            robots,
            crews,
        }
    }

    /// Rejects crew references that do not resolve to a stored crew.
    async fn ensure_crew_exists(&self, crew: CrewId) -> DirectoryResult<()> {
        if self.crews.find_by_id(crew).await?.is_none() {
            return Err(DirectoryError::UnknownCrew(crew));
        }
        Ok(())
    }

    /// Creates an employee after validating its crew reference.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownCrew`] when the payload references
    /// a crew that does not exist.
    pub async fn create_employee(&self, new: NewEmployee) -> DirectoryResult<Employee> {
        if let Some(crew) = new.crew {
            self.ensure_crew_exists(crew).await?;
        }
        Ok(self.employees.create(new).await?)
    }

    /// Fetches an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmployeeNotFound`] when the id is absent.
    pub async fn employee(&self, id: EmployeeId) -> DirectoryResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::EmployeeNotFound(id))
    }

    /// Lists employees matching the filter within the page.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn employees(
        &self,
        page: Page,
        filter: &EmployeeFilter,
    ) -> DirectoryResult<Vec<Employee>> {
        Ok(self.employees.list(page, filter).await?)
    }

    /// Lists employees assigned to the crew.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn employees_by_crew(&self, crew: CrewId) -> DirectoryResult<Vec<Employee>> {
        Ok(self.employees.find_by_crew(crew).await?)
    }

    /// Returns the distinct, sorted body tags in use across employees.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn employee_bodies(&self) -> DirectoryResult<Vec<String>> {
        let employees = self
            .employees
            .list(Page::unbounded(), &EmployeeFilter::default())
            .await?;
        let bodies: BTreeSet<String> = employees
            .into_iter()
            .filter_map(|employee| employee.body)
            .map(|body| body.trim().to_owned())
            .filter(|body| !body.is_empty())
            .collect();
        Ok(bodies.into_iter().collect())
    }

    /// Returns the distinct, sorted crew ids referenced by employees.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn employee_crews(&self) -> DirectoryResult<Vec<CrewId>> {
        let employees = self
            .employees
            .list(Page::unbounded(), &EmployeeFilter::default())
            .await?;
        let crews: BTreeSet<CrewId> = employees
            .into_iter()
            .filter_map(|employee| employee.crew)
            .collect();
        Ok(crews.into_iter().collect())
    }

    /// Merge-patches an employee, validating a changed crew reference.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmployeeNotFound`] when the id is absent
    /// and [`DirectoryError::UnknownCrew`] when the patch assigns a crew
    /// that does not exist.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> DirectoryResult<Employee> {
        if let Some(crew) = patch.assigned_crew() {
            self.ensure_crew_exists(crew).await?;
        }
        self.employees
            .update(id, patch)
            .await?
            .ok_or(DirectoryError::EmployeeNotFound(id))
    }

    /// Deletes an employee.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmployeeNotFound`] when the id is absent.
    pub async fn delete_employee(&self, id: EmployeeId) -> DirectoryResult<()> {
        if !self.employees.delete(id).await? {
            return Err(DirectoryError::EmployeeNotFound(id));
        }
        Ok(())
    }

    /// Creates a transport asset.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn create_transport(&self, new: NewTransport) -> DirectoryResult<Transport> {
        Ok(self.transports.create(new).await?)
    }

    /// Fetches a transport by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::TransportNotFound`] when the id is absent.
    pub async fn transport(&self, id: TransportId) -> DirectoryResult<Transport> {
        self.transports
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::TransportNotFound(id))
    }

    /// Lists transports within the page.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn transports(&self, page: Page) -> DirectoryResult<Vec<Transport>> {
        Ok(self.transports.list(page).await?)
    }

    /// Merge-patches a transport.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::TransportNotFound`] when the id is absent.
    pub async fn update_transport(
        &self,
        id: TransportId,
        patch: TransportPatch,
    ) -> DirectoryResult<Transport> {
        self.transports
            .update(id, patch)
            .await?
            .ok_or(DirectoryError::TransportNotFound(id))
    }

    /// Deletes a transport.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::TransportNotFound`] when the id is absent.
    pub async fn delete_transport(&self, id: TransportId) -> DirectoryResult<()> {
        if !self.transports.delete(id).await? {
            return Err(DirectoryError::TransportNotFound(id));
        }
        Ok(())
    }

    /// Creates a robot record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateRobotNumber`] when the business
    /// number is already taken.
    pub async fn create_robot(&self, new: NewRobot) -> DirectoryResult<Robot> {
        Ok(self.robots.create(new).await?)
    }

    /// Fetches a robot by store id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::RobotNotFound`] when the id is absent.
    pub async fn robot(&self, id: RobotId) -> DirectoryResult<Robot> {
        self.robots
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::RobotNotFound(id))
    }

    /// Lists robots within the page.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn robots(&self, page: Page) -> DirectoryResult<Vec<Robot>> {
        Ok(self.robots.list(page).await?)
    }

    /// Merge-patches a robot.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::RobotNotFound`] when the id is absent and
    /// [`DirectoryError::DuplicateRobotNumber`] when the patched number
    /// collides.
    pub async fn update_robot(&self, id: RobotId, patch: RobotPatch) -> DirectoryResult<Robot> {
        self.robots
            .update(id, patch)
            .await?
            .ok_or(DirectoryError::RobotNotFound(id))
    }

    /// Deletes a robot.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::RobotNotFound`] when the id is absent.
    pub async fn delete_robot(&self, id: RobotId) -> DirectoryResult<()> {
        if !self.robots.delete(id).await? {
            return Err(DirectoryError::RobotNotFound(id));
        }
        Ok(())
    }

    /// Creates a crew.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn create_crew(&self, new: NewCrew) -> DirectoryResult<Crew> {
        Ok(self.crews.create(new).await?)
    }

    /// Fetches a crew by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CrewNotFound`] when the id is absent.
    pub async fn crew(&self, id: CrewId) -> DirectoryResult<Crew> {
        self.crews
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::CrewNotFound(id))
    }

    /// Lists crews within the page.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] on store failure.
    pub async fn crews(&self, page: Page) -> DirectoryResult<Vec<Crew>> {
        Ok(self.crews.list(page).await?)
    }

    /// Merge-patches a crew.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CrewNotFound`] when the id is absent.
    pub async fn update_crew(&self, id: CrewId, patch: CrewPatch) -> DirectoryResult<Crew> {
        self.crews
            .update(id, patch)
            .await?
            .ok_or(DirectoryError::CrewNotFound(id))
    }

    /// Deletes a crew. Employees keep their crew id; membership is not
    /// cascaded or cleared.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CrewNotFound`] when the id is absent.
    pub async fn delete_crew(&self, id: CrewId) -> DirectoryResult<()> {
        if !self.crews.delete(id).await? {
            return Err(DirectoryError::CrewNotFound(id));
        }
        Ok(())
    }
}
