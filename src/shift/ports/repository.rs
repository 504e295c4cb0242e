//! Repository ports for shifts and tasks.
//!
//! Alongside the uniform CRUD shape, these ports carry the temporal and
//! reference finders the scheduling services need. Interval semantics are
//! part of the contract:
//!
//! - `find_by_date_between` filters on the shift's calendar `date`,
//!   inclusive on both bounds;
//! - `find_in_window` filters tasks fully contained in the window
//!   (`time_start >= start` and `time_end <= end`);
//! - `find_active_at` is a closed interval on `time_start ..= time_end`.

use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::directory::ports::Page;
use crate::shift::domain::{
    NewShift, NewTask, Shift, ShiftId, ShiftPatch, Task, TaskId, TaskKind, TaskPatch,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for shift and task repository operations.
pub type ShiftStoreResult<T> = Result<T, ShiftStoreError>;

/// Errors returned by shift and task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ShiftStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ShiftStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Shift persistence contract.
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Stores a new shift, assigning the id and timestamps.
    async fn create(&self, new: NewShift) -> ShiftStoreResult<Shift>;

    /// Finds a shift by id; `None` when absent.
    async fn find_by_id(&self, id: ShiftId) -> ShiftStoreResult<Option<Shift>>;

    /// Lists shifts in id order within the page.
    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Shift>>;

    /// Returns shifts whose `date` lies in `[start, end]`, both inclusive.
    async fn find_by_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Shift>>;

    /// Returns shifts active at the instant (closed working window).
    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Shift>>;

    /// Applies a merge-patch and bumps `edited_at`; `None` when absent.
    async fn update(&self, id: ShiftId, patch: ShiftPatch) -> ShiftStoreResult<Option<Shift>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: ShiftId) -> ShiftStoreResult<bool>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, assigning the id and timestamps.
    async fn create(&self, new: NewTask) -> ShiftStoreResult<Task>;

    /// Finds a task by id; `None` when absent.
    async fn find_by_id(&self, id: TaskId) -> ShiftStoreResult<Option<Task>>;

    /// Lists tasks in id order within the page.
    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Task>>;

    /// Returns every task of the shift, in id order, unpaginated.
    async fn find_by_shift(&self, shift_id: ShiftId) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks assigned to the executor.
    async fn find_by_executor(&self, executor: EmployeeId) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks assigned to the robot.
    async fn find_by_robot(&self, robot_id: RobotId) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks allocated the transport.
    async fn find_by_transport(&self, transport_id: TransportId) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks of the given kind.
    async fn find_by_kind(&self, kind: TaskKind) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks fully contained in the window.
    async fn find_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Task>>;

    /// Returns tasks active at the instant (closed window).
    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Task>>;

    /// Applies a merge-patch; `None` when the id is absent.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> ShiftStoreResult<Option<Task>>;

    /// Deletes by id, reporting whether a record was removed.
    async fn delete(&self, id: TaskId) -> ShiftStoreResult<bool>;
}
