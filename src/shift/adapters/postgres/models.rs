//! Diesel row models for shift and task tables.

use super::schema::{shifts, tasks};
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::shift::domain::{NewShift, NewTask, Shift, ShiftId, Task, TaskId, TaskKind};
use crate::shift::ports::ShiftStoreError;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for shift records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shifts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShiftRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Calendar day the shift is planned for.
    pub date: DateTime<Utc>,
    /// Working window start.
    pub time_start: DateTime<Utc>,
    /// Working window end.
    pub time_end: DateTime<Utc>,
    /// Last roster edit.
    pub edited_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<ShiftRow> for Shift {
    fn from(row: ShiftRow) -> Self {
        Self {
            id: ShiftId::from_raw(row.id),
            date: row.date,
            time_start: row.time_start,
            time_end: row.time_end,
            edited_at: row.edited_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert model for shift records; the id is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shifts)]
pub struct NewShiftRow {
    /// Calendar day the shift is planned for.
    pub date: DateTime<Utc>,
    /// Working window start.
    pub time_start: DateTime<Utc>,
    /// Working window end.
    pub time_end: DateTime<Utc>,
    /// Last roster edit.
    pub edited_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewShiftRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub const fn from_new(new: NewShift, now: DateTime<Utc>) -> Self {
        Self {
            date: new.date,
            time_start: new.time_start,
            time_end: new.time_end,
            edited_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset written after a merge-patch is applied in the domain.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = shifts)]
pub struct ShiftChangeset {
    /// Calendar day the shift is planned for.
    pub date: DateTime<Utc>,
    /// Working window start.
    pub time_start: DateTime<Utc>,
    /// Working window end.
    pub time_end: DateTime<Utc>,
    /// Last roster edit.
    pub edited_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ShiftChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub const fn from_domain(shift: &Shift) -> Self {
        Self {
            date: shift.date,
            time_start: shift.time_start,
            time_end: shift.time_end,
            edited_at: shift.edited_at,
            updated_at: shift.updated_at,
        }
    }
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning shift.
    pub shift_id: i64,
    /// Executing employee.
    pub executor: i64,
    /// Assigned robot (store id).
    pub robot_id: i64,
    /// Allocated transport, if any.
    pub transport_id: Option<i64>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work, canonical lowercase form.
    pub kind: String,
    /// Route payload for route tasks.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file.
    pub geojson_filename: Option<String>,
    /// Ticket references as a JSON array of strings.
    pub tickets: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskRow {
    /// Maps the row into the domain record, parsing the kind tag and the
    /// ticket array.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the stored kind or ticket payload
    /// is malformed.
    pub fn into_domain(self) -> Result<Task, ShiftStoreError> {
        let kind = TaskKind::try_from(self.kind.as_str()).map_err(ShiftStoreError::persistence)?;
        let tickets: Vec<String> =
            serde_json::from_value(self.tickets).map_err(ShiftStoreError::persistence)?;
        Ok(Task {
            id: TaskId::from_raw(self.id),
            shift_id: ShiftId::from_raw(self.shift_id),
            executor: EmployeeId::from_raw(self.executor),
            robot_id: RobotId::from_raw(self.robot_id),
            transport_id: self.transport_id.map(TransportId::from_raw),
            time_start: self.time_start,
            time_end: self.time_end,
            kind,
            geojson: self.geojson,
            geojson_filename: self.geojson_filename,
            tickets,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Insert model for task records; the id is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning shift.
    pub shift_id: i64,
    /// Executing employee.
    pub executor: i64,
    /// Assigned robot (store id).
    pub robot_id: i64,
    /// Allocated transport, if any.
    pub transport_id: Option<i64>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work, canonical lowercase form.
    pub kind: String,
    /// Route payload for route tasks.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file.
    pub geojson_filename: Option<String>,
    /// Ticket references as a JSON array of strings.
    pub tickets: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewTaskRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub fn from_new(new: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            shift_id: new.shift_id.value(),
            executor: new.executor.value(),
            robot_id: new.robot_id.value(),
            transport_id: new.transport_id.map(TransportId::value),
            time_start: new.time_start,
            time_end: new.time_end,
            kind: new.kind.as_str().to_owned(),
            geojson: new.geojson,
            geojson_filename: new.geojson_filename,
            tickets: Value::from(new.tickets),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset written after a merge-patch is applied in the domain.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Owning shift.
    pub shift_id: i64,
    /// Executing employee.
    pub executor: i64,
    /// Assigned robot (store id).
    pub robot_id: i64,
    /// Allocated transport, if any.
    pub transport_id: Option<i64>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work, canonical lowercase form.
    pub kind: String,
    /// Route payload for route tasks.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file.
    pub geojson_filename: Option<String>,
    /// Ticket references as a JSON array of strings.
    pub tickets: Value,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub fn from_domain(task: &Task) -> Self {
        Self {
            shift_id: task.shift_id.value(),
            executor: task.executor.value(),
            robot_id: task.robot_id.value(),
            transport_id: task.transport_id.map(TransportId::value),
            time_start: task.time_start,
            time_end: task.time_end,
            kind: task.kind.as_str().to_owned(),
            geojson: task.geojson.clone(),
            geojson_filename: task.geojson_filename.clone(),
            tickets: Value::from(task.tickets.clone()),
            updated_at: task.updated_at,
        }
    }
}
