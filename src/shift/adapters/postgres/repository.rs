//! `PostgreSQL` repositories for shifts and tasks.
//!
//! Merge-patches are applied read-modify-write, so concurrent updates to
//! the same row follow last-writer-wins. Temporal filters run in SQL; the
//! interval semantics match the port contract exactly.

use super::{
    models::{NewShiftRow, NewTaskRow, ShiftChangeset, ShiftRow, TaskChangeset, TaskRow},
    schema::{shifts, tasks},
};
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::shift::{
    domain::{NewShift, NewTask, Shift, ShiftId, ShiftPatch, Task, TaskId, TaskKind, TaskPatch},
    ports::{Page, ShiftRepository, ShiftStoreError, ShiftStoreResult, TaskRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by shift adapters.
pub type ShiftPgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs a blocking diesel closure on the tokio blocking pool.
async fn run_blocking<F, T>(pool: &ShiftPgPool, f: F) -> ShiftStoreResult<T>
where
    F: FnOnce(&mut PgConnection) -> ShiftStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(ShiftStoreError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(ShiftStoreError::persistence)?
}

/// Maps a vector of task rows into domain records.
fn rows_to_tasks(rows: Vec<TaskRow>) -> ShiftStoreResult<Vec<Task>> {
    rows.into_iter().map(TaskRow::into_domain).collect()
}

/// `PostgreSQL`-backed shift repository.
#[derive(Debug, Clone)]
pub struct PostgresShiftRepository {
    pool: ShiftPgPool,
}

impl PostgresShiftRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ShiftPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftRepository for PostgresShiftRepository {
    async fn create(&self, new: NewShift) -> ShiftStoreResult<Shift> {
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(shifts::table)
                .values(NewShiftRow::from_new(new, Utc::now()))
                .returning(ShiftRow::as_returning())
                .get_result::<ShiftRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_id(&self, id: ShiftId) -> ShiftStoreResult<Option<Shift>> {
        run_blocking(&self.pool, move |connection| {
            let row = shifts::table
                .find(id.value())
                .select(ShiftRow::as_select())
                .first::<ShiftRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            Ok(row.map(Shift::from))
        })
        .await
    }

    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Shift>> {
        run_blocking(&self.pool, move |connection| {
            let rows = shifts::table
                .order(shifts::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(ShiftRow::as_select())
                .load::<ShiftRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(rows.into_iter().map(Shift::from).collect())
        })
        .await
    }

    async fn find_by_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Shift>> {
        run_blocking(&self.pool, move |connection| {
            let rows = shifts::table
                .filter(shifts::date.ge(start))
                .filter(shifts::date.le(end))
                .order(shifts::id.asc())
                .select(ShiftRow::as_select())
                .load::<ShiftRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(rows.into_iter().map(Shift::from).collect())
        })
        .await
    }

    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Shift>> {
        run_blocking(&self.pool, move |connection| {
            let rows = shifts::table
                .filter(shifts::time_start.le(instant))
                .filter(shifts::time_end.ge(instant))
                .order(shifts::id.asc())
                .select(ShiftRow::as_select())
                .load::<ShiftRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(rows.into_iter().map(Shift::from).collect())
        })
        .await
    }

    async fn update(&self, id: ShiftId, patch: ShiftPatch) -> ShiftStoreResult<Option<Shift>> {
        run_blocking(&self.pool, move |connection| {
            let row = shifts::table
                .find(id.value())
                .select(ShiftRow::as_select())
                .first::<ShiftRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut shift = Shift::from(row);
            patch.apply_to(&mut shift);
            let now = Utc::now();
            shift.edited_at = now;
            shift.updated_at = now;
            let updated = diesel::update(shifts::table.find(id.value()))
                .set(ShiftChangeset::from_domain(&shift))
                .returning(ShiftRow::as_returning())
                .get_result::<ShiftRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            Ok(updated.map(Shift::from))
        })
        .await
    }

    async fn delete(&self, id: ShiftId) -> ShiftStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(shifts::table.find(id.value()))
                .execute(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: ShiftPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ShiftPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, new: NewTask) -> ShiftStoreResult<Task> {
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(NewTaskRow::from_new(new, Utc::now()))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            row.into_domain()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> ShiftStoreResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            row.map(TaskRow::into_domain).transpose()
        })
        .await
    }

    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .offset(page.offset)
                .limit(page.limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_shift(&self, shift_id: ShiftId) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::shift_id.eq(shift_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_executor(&self, executor: EmployeeId) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::executor.eq(executor.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_robot(&self, robot_id: RobotId) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::robot_id.eq(robot_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_transport(&self, transport_id: TransportId) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::transport_id.eq(transport_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_kind(&self, kind: TaskKind) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::kind.eq(kind.as_str()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::time_start.ge(start))
                .filter(tasks::time_end.le(end))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::time_start.le(instant))
                .filter(tasks::time_end.ge(instant))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ShiftStoreError::persistence)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> ShiftStoreResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut task = row.into_domain()?;
            patch.apply_to(&mut task);
            task.updated_at = Utc::now();
            let updated = diesel::update(tasks::table.find(id.value()))
                .set(TaskChangeset::from_domain(&task))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(ShiftStoreError::persistence)?;
            updated.map(TaskRow::into_domain).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> ShiftStoreResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(ShiftStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}
