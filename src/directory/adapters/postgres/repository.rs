//! `PostgreSQL` repositories for roster reference data.
//!
//! Merge-patches are applied read-modify-write: the current row is loaded,
//! the domain patch applied, and the full row written back. Concurrent
//! updates therefore follow last-writer-wins, matching the store contract.

use super::{
    models::{
        CrewChangeset, CrewRow, EmployeeChangeset, EmployeeRow, NewCrewRow, NewEmployeeRow,
        NewRobotRow, NewTransportRow, RobotChangeset, RobotRow, TransportChangeset, TransportRow,
    },
    schema::{crews, employees, robots, transports},
};
use crate::directory::{
    domain::{
        Crew, CrewId, CrewPatch, Employee, EmployeeId, EmployeePatch, NewCrew, NewEmployee,
        NewRobot, NewTransport, Robot, RobotId, RobotPatch, Transport, TransportId, TransportPatch,
    },
    ports::{
        CrewRepository, DirectoryStoreError, DirectoryStoreResult, EmployeeFilter,
        EmployeeRepository, Page, RobotRepository, TransportRepository,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs a blocking diesel closure on the tokio blocking pool.
async fn run_blocking<F, T>(pool: &DirectoryPgPool, f: F) -> DirectoryStoreResult<T>
where
    F: FnOnce(&mut PgConnection) -> DirectoryStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(DirectoryStoreError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(DirectoryStoreError::persistence)?
}

/// Maps a unique-violation on the robot number index, wrapping everything
/// else as a persistence failure.
fn map_robot_insert_error(err: DieselError, number: i64) -> DirectoryStoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DirectoryStoreError::DuplicateRobotNumber(number)
        }
        other => DirectoryStoreError::persistence(other),
    }
}

/// `PostgreSQL`-backed employee repository.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: DirectoryPgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, new: NewEmployee) -> DirectoryStoreResult<Employee> {
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(employees::table)
                .values(NewEmployeeRow::from_new(new, Utc::now()))
                .returning(EmployeeRow::as_returning())
                .get_result::<EmployeeRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: EmployeeId) -> DirectoryStoreResult<Option<Employee>> {
        run_blocking(&self.pool, move |connection| {
            let row = employees::table
                .find(id.value())
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.map(Employee::from))
        })
        .await
    }

    async fn list(
        &self,
        page: Page,
        filter: &EmployeeFilter,
    ) -> DirectoryStoreResult<Vec<Employee>> {
        let filter = filter.clone();
        run_blocking(&self.pool, move |connection| {
            let mut query = employees::table.into_boxed();
            if let Some(body) = &filter.body {
                query = query.filter(employees::body.ilike(format!("%{body}%")));
            }
            if let Some(crew) = filter.crew {
                query = query.filter(employees::crew.eq(crew.value()));
            }
            if let Some(parking) = filter.parking {
                query = query.filter(employees::parking.eq(parking));
            }
            if let Some(drive) = filter.drive {
                query = query.filter(employees::drive.eq(drive));
            }
            if let Some(telemedicine) = filter.telemedicine {
                query = query.filter(employees::telemedicine.eq(telemedicine));
            }
            if let Some(auto_vc_access) = filter.auto_vc_access {
                query = query.filter(employees::auto_vc_access.eq(auto_vc_access));
            }
            let rows = query
                .order(employees::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(rows.into_iter().map(Employee::from).collect())
        })
        .await
    }

    async fn find_by_crew(&self, crew: CrewId) -> DirectoryStoreResult<Vec<Employee>> {
        run_blocking(&self.pool, move |connection| {
            let rows = employees::table
                .filter(employees::crew.eq(crew.value()))
                .order(employees::id.asc())
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(rows.into_iter().map(Employee::from).collect())
        })
        .await
    }

    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> DirectoryStoreResult<Option<Employee>> {
        run_blocking(&self.pool, move |connection| {
            let row = employees::table
                .find(id.value())
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut employee = Employee::from(row);
            patch.apply_to(&mut employee);
            employee.updated_at = Utc::now();
            let updated = diesel::update(employees::table.find(id.value()))
                .set(EmployeeChangeset::from_domain(&employee))
                .returning(EmployeeRow::as_returning())
                .get_result::<EmployeeRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(updated.map(Employee::from))
        })
        .await
    }

    async fn delete(&self, id: EmployeeId) -> DirectoryStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(employees::table.find(id.value()))
                .execute(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

/// `PostgreSQL`-backed transport repository.
#[derive(Debug, Clone)]
pub struct PostgresTransportRepository {
    pool: DirectoryPgPool,
}

impl PostgresTransportRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransportRepository for PostgresTransportRepository {
    async fn create(&self, new: NewTransport) -> DirectoryStoreResult<Transport> {
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(transports::table)
                .values(NewTransportRow::from_new(new, Utc::now()))
                .returning(TransportRow::as_returning())
                .get_result::<TransportRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: TransportId) -> DirectoryStoreResult<Option<Transport>> {
        run_blocking(&self.pool, move |connection| {
            let row = transports::table
                .find(id.value())
                .select(TransportRow::as_select())
                .first::<TransportRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.map(Transport::from))
        })
        .await
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Transport>> {
        run_blocking(&self.pool, move |connection| {
            let rows = transports::table
                .order(transports::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(TransportRow::as_select())
                .load::<TransportRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(rows.into_iter().map(Transport::from).collect())
        })
        .await
    }

    async fn update(
        &self,
        id: TransportId,
        patch: TransportPatch,
    ) -> DirectoryStoreResult<Option<Transport>> {
        run_blocking(&self.pool, move |connection| {
            let row = transports::table
                .find(id.value())
                .select(TransportRow::as_select())
                .first::<TransportRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut transport = Transport::from(row);
            patch.apply_to(&mut transport);
            transport.updated_at = Utc::now();
            let updated = diesel::update(transports::table.find(id.value()))
                .set(TransportChangeset::from_domain(&transport))
                .returning(TransportRow::as_returning())
                .get_result::<TransportRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(updated.map(Transport::from))
        })
        .await
    }

    async fn delete(&self, id: TransportId) -> DirectoryStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(transports::table.find(id.value()))
                .execute(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

/// `PostgreSQL`-backed robot repository.
///
/// The unique index on `robots.number` backs the duplicate-number error.
#[derive(Debug, Clone)]
pub struct PostgresRobotRepository {
    pool: DirectoryPgPool,
}

impl PostgresRobotRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RobotRepository for PostgresRobotRepository {
    async fn create(&self, new: NewRobot) -> DirectoryStoreResult<Robot> {
        let number = new.number;
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(robots::table)
                .values(NewRobotRow::from_new(new, Utc::now()))
                .returning(RobotRow::as_returning())
                .get_result::<RobotRow>(connection)
                .map_err(|err| map_robot_insert_error(err, number))?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: RobotId) -> DirectoryStoreResult<Option<Robot>> {
        run_blocking(&self.pool, move |connection| {
            let row = robots::table
                .find(id.value())
                .select(RobotRow::as_select())
                .first::<RobotRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.map(Robot::from))
        })
        .await
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Robot>> {
        run_blocking(&self.pool, move |connection| {
            let rows = robots::table
                .order(robots::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(RobotRow::as_select())
                .load::<RobotRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(rows.into_iter().map(Robot::from).collect())
        })
        .await
    }

    async fn update(&self, id: RobotId, patch: RobotPatch) -> DirectoryStoreResult<Option<Robot>> {
        run_blocking(&self.pool, move |connection| {
            let row = robots::table
                .find(id.value())
                .select(RobotRow::as_select())
                .first::<RobotRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut robot = Robot::from(row);
            patch.apply_to(&mut robot);
            robot.updated_at = Utc::now();
            let number = robot.number;
            let updated = diesel::update(robots::table.find(id.value()))
                .set(RobotChangeset::from_domain(&robot))
                .returning(RobotRow::as_returning())
                .get_result::<RobotRow>(connection)
                .optional()
                .map_err(|err| map_robot_insert_error(err, number))?;
            Ok(updated.map(Robot::from))
        })
        .await
    }

    async fn delete(&self, id: RobotId) -> DirectoryStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(robots::table.find(id.value()))
                .execute(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

/// `PostgreSQL`-backed crew repository.
#[derive(Debug, Clone)]
pub struct PostgresCrewRepository {
    pool: DirectoryPgPool,
}

impl PostgresCrewRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrewRepository for PostgresCrewRepository {
    async fn create(&self, new: NewCrew) -> DirectoryStoreResult<Crew> {
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(crews::table)
                .values(NewCrewRow::from_new(new, Utc::now()))
                .returning(CrewRow::as_returning())
                .get_result::<CrewRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: CrewId) -> DirectoryStoreResult<Option<Crew>> {
        run_blocking(&self.pool, move |connection| {
            let row = crews::table
                .find(id.value())
                .select(CrewRow::as_select())
                .first::<CrewRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(row.map(Crew::from))
        })
        .await
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Crew>> {
        run_blocking(&self.pool, move |connection| {
            let rows = crews::table
                .order(crews::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(CrewRow::as_select())
                .load::<CrewRow>(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(rows.into_iter().map(Crew::from).collect())
        })
        .await
    }

    async fn update(&self, id: CrewId, patch: CrewPatch) -> DirectoryStoreResult<Option<Crew>> {
        run_blocking(&self.pool, move |connection| {
            let row = crews::table
                .find(id.value())
                .select(CrewRow::as_select())
                .first::<CrewRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut crew = Crew::from(row);
            patch.apply_to(&mut crew);
            crew.updated_at = Utc::now();
            let updated = diesel::update(crews::table.find(id.value()))
                .set(CrewChangeset::from_domain(&crew))
                .returning(CrewRow::as_returning())
                .get_result::<CrewRow>(connection)
                .optional()
                .map_err(DirectoryStoreError::persistence)?;
            Ok(updated.map(Crew::from))
        })
        .await
    }

    async fn delete(&self, id: CrewId) -> DirectoryStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(crews::table.find(id.value()))
                .execute(connection)
                .map_err(DirectoryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}
