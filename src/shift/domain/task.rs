//! Task records, the task kind tag, and create/patch payloads.

use super::shift::validate_window;
use super::{ParseTaskKindError, ShiftDomainError, ShiftId, TaskId};
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of work a task represents.
///
/// The GeoJSON-required rule is attached to [`TaskKind::Route`] only: a
/// route task must carry its route payload, everything else may omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Drive a mapped route; requires a GeoJSON payload.
    Route,
    /// Sweep an area ("carpet" coverage).
    Carpet,
    /// Demonstration run.
    Demo,
    /// Anything else, described out of band.
    Custom,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Carpet => "carpet",
            Self::Demo => "demo",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "route" => Ok(Self::Route),
            "carpet" => Ok(Self::Carpet),
            "demo" => Ok(Self::Demo),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

/// A single assignment of an executor to a time window within a shift.
///
/// `robot_id` references [`crate::directory::domain::Robot`] by store id;
/// the enrichment pipeline swaps it for the robot's business number on the
/// way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Owning shift.
    pub shift_id: ShiftId,
    /// Executing employee.
    pub executor: EmployeeId,
    /// Assigned robot.
    pub robot_id: RobotId,
    /// Allocated transport, if any.
    pub transport_id: Option<TransportId>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work.
    pub kind: TaskKind,
    /// Route payload; required for route tasks.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file, if any.
    pub geojson_filename: Option<String>,
    /// Ticket references backing the task; never empty.
    pub tickets: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Returns `true` when the instant falls inside the task window,
    /// closed on both bounds.
    #[must_use]
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.time_start <= instant && instant <= self.time_end
    }

    /// Re-validates the record, used after a merge-patch is applied.
    ///
    /// # Errors
    ///
    /// Same rules as [`NewTask::validate`].
    pub fn validate(&self) -> Result<(), ShiftDomainError> {
        validate_task_content(
            self.kind,
            self.geojson.as_ref(),
            &self.tickets,
            self.time_start,
            self.time_end,
        )
    }
}

/// Payload for creating a task; ids and timestamps are store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Owning shift.
    pub shift_id: ShiftId,
    /// Executing employee.
    pub executor: EmployeeId,
    /// Assigned robot.
    pub robot_id: RobotId,
    /// Allocated transport, if any.
    pub transport_id: Option<TransportId>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work.
    pub kind: TaskKind,
    /// Route payload; required for route tasks.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file, if any.
    pub geojson_filename: Option<String>,
    /// Ticket references backing the task; never empty.
    pub tickets: Vec<String>,
}

impl NewTask {
    /// Validates the payload before any write.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftDomainError::RouteTaskMissingGeojson`] for a route
    /// task without its payload, [`ShiftDomainError::EmptyTickets`] for an
    /// empty ticket list, and [`ShiftDomainError::InvertedTimeWindow`] when
    /// the window ends before it starts.
    pub fn validate(&self) -> Result<(), ShiftDomainError> {
        validate_task_content(
            self.kind,
            self.geojson.as_ref(),
            &self.tickets,
            self.time_start,
            self.time_end,
        )
    }
}

/// Merge-patch for a task: only fields present in the payload are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Move the task to another shift.
    pub shift_id: Option<ShiftId>,
    /// New executor.
    pub executor: Option<EmployeeId>,
    /// New robot.
    pub robot_id: Option<RobotId>,
    /// New transport; `Some(None)` releases it.
    pub transport_id: Option<Option<TransportId>>,
    /// New window start.
    pub time_start: Option<DateTime<Utc>>,
    /// New window end.
    pub time_end: Option<DateTime<Utc>>,
    /// New kind of work.
    pub kind: Option<TaskKind>,
    /// New route payload; `Some(None)` clears it.
    pub geojson: Option<Option<Value>>,
    /// New source filename; `Some(None)` clears it.
    pub geojson_filename: Option<Option<String>>,
    /// Replacement ticket list.
    pub tickets: Option<Vec<String>>,
}

impl TaskPatch {
    /// Applies the patch in place, leaving absent fields unchanged.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(shift_id) = self.shift_id {
            task.shift_id = shift_id;
        }
        if let Some(executor) = self.executor {
            task.executor = executor;
        }
        if let Some(robot_id) = self.robot_id {
            task.robot_id = robot_id;
        }
        if let Some(transport_id) = self.transport_id {
            task.transport_id = transport_id;
        }
        if let Some(time_start) = self.time_start {
            task.time_start = time_start;
        }
        if let Some(time_end) = self.time_end {
            task.time_end = time_end;
        }
        if let Some(kind) = self.kind {
            task.kind = kind;
        }
        if let Some(geojson) = self.geojson {
            task.geojson = geojson;
        }
        if let Some(geojson_filename) = self.geojson_filename {
            task.geojson_filename = geojson_filename;
        }
        if let Some(tickets) = self.tickets {
            task.tickets = tickets;
        }
    }
}

/// Shared validation for create payloads and patched records.
fn validate_task_content(
    kind: TaskKind,
    geojson: Option<&Value>,
    tickets: &[String],
    time_start: DateTime<Utc>,
    time_end: DateTime<Utc>,
) -> Result<(), ShiftDomainError> {
    if matches!(kind, TaskKind::Route) && geojson.is_none() {
        return Err(ShiftDomainError::RouteTaskMissingGeojson);
    }
    if tickets.is_empty() {
        return Err(ShiftDomainError::EmptyTickets);
    }
    validate_window(time_start, time_end)
}
