//! Enriched views: tasks with denormalized display fields and composed
//! shifts.

use super::{Shift, ShiftId, TaskId, TaskKind};
use crate::directory::domain::{EmployeeId, TransportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat task view with display fields joined in.
///
/// Enrichment fields stay unset when the referenced entity no longer
/// exists; `robot_number` falls back to the raw robot id instead, so the
/// caller always sees a number. The view is reconstructible from a [`Task`]
/// plus related-entity lookups and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTask {
    /// Task identifier.
    pub id: TaskId,
    /// Owning shift.
    pub shift_id: ShiftId,
    /// Executing employee id.
    pub executor: EmployeeId,
    /// Robot business number, or the raw robot id when unresolved.
    pub robot_number: i64,
    /// Allocated transport, if any.
    pub transport_id: Option<TransportId>,
    /// Task window start.
    pub time_start: DateTime<Utc>,
    /// Task window end.
    pub time_end: DateTime<Utc>,
    /// Kind of work.
    pub kind: TaskKind,
    /// Route payload.
    pub geojson: Option<Value>,
    /// Name of the uploaded GeoJSON source file.
    pub geojson_filename: Option<String>,
    /// Ticket references backing the task.
    pub tickets: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Executor display name, when the employee still exists.
    pub executor_name: Option<String>,
    /// Transport display name, when resolvable.
    pub transport_name: Option<String>,
    /// Transport registration plate, when resolvable.
    pub transport_gov_number: Option<String>,
}

/// A shift together with its enriched tasks, in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedShift {
    /// Shift identifier.
    pub id: ShiftId,
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
    /// Enriched tasks; empty for a shift with no tasks yet.
    pub tasks: Vec<EnrichedTask>,
}

impl ComposedShift {
    /// Builds the composite from a shift and its already-enriched tasks.
    #[must_use]
    pub fn from_parts(shift: Shift, tasks: Vec<EnrichedTask>) -> Self {
        Self {
            id: shift.id,
            date: shift.date,
            time_start: shift.time_start,
            time_end: shift.time_end,
            edited_at: shift.edited_at,
            created_at: shift.created_at,
            updated_at: shift.updated_at,
            tasks,
        }
    }
}
