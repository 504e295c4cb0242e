//! Shift and task CRUD with boundary validation.
//!
//! Payloads are validated before any write, and merge-patches are validated
//! against the patched record before the store is touched, so a rejected
//! request never leaves a partial mutation behind.

use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::directory::services::ErrorKind;
use crate::shift::domain::{
    NewShift, NewTask, Shift, ShiftDomainError, ShiftId, ShiftPatch, Task, TaskId, TaskKind,
    TaskPatch,
};
use crate::shift::ports::{Page, ShiftRepository, ShiftStoreError, TaskRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for scheduling service operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Errors surfaced by the scheduling service.
#[derive(Debug, Clone, Error)]
pub enum SchedulingError {
    /// No shift with the given id.
    #[error("shift not found: {0}")]
    ShiftNotFound(ShiftId),

    /// No task with the given id.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task payload referenced a shift that does not exist.
    #[error("unknown shift: {0}")]
    UnknownShift(ShiftId),

    /// The payload failed domain validation; nothing was written.
    #[error(transparent)]
    Invalid(#[from] ShiftDomainError),

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] ShiftStoreError),
}

impl SchedulingError {
    /// Classifies the error for status-code mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ShiftNotFound(_) | Self::TaskNotFound(_) => ErrorKind::NotFound,
            Self::UnknownShift(_) | Self::Invalid(_) => ErrorKind::Validation,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}

/// CRUD service over the shift and task stores.
#[derive(Clone)]
pub struct SchedulingService {
    shifts: Arc<dyn ShiftRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl SchedulingService {
    /// Creates a scheduling service over the given stores.
    #[must_use]
    pub fn new(shifts: Arc<dyn ShiftRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { shifts, tasks }
    }

    /// Rejects task payloads that reference a shift that does not exist.
    async fn ensure_shift_exists(&self, shift_id: ShiftId) -> SchedulingResult<()> {
        if self.shifts.find_by_id(shift_id).await?.is_none() {
            return Err(SchedulingError::UnknownShift(shift_id));
        }
        Ok(())
    }

    /// Creates a shift after validating its time window.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Invalid`] for an inverted window.
    pub async fn create_shift(&self, new: NewShift) -> SchedulingResult<Shift> {
        new.validate()?;
        Ok(self.shifts.create(new).await?)
    }

    /// Fetches a shift by id.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::ShiftNotFound`] when the id is absent.
    pub async fn shift(&self, id: ShiftId) -> SchedulingResult<Shift> {
        self.shifts
            .find_by_id(id)
            .await?
            .ok_or(SchedulingError::ShiftNotFound(id))
    }

    /// Lists shifts within the page.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn shifts(&self, page: Page) -> SchedulingResult<Vec<Shift>> {
        Ok(self.shifts.list(page).await?)
    }

    /// Merge-patches a shift, re-validating the patched window before the
    /// write.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::ShiftNotFound`] when the id is absent and
    /// [`SchedulingError::Invalid`] when the patch would invert the window.
    pub async fn update_shift(&self, id: ShiftId, patch: ShiftPatch) -> SchedulingResult<Shift> {
        let mut patched = self.shift(id).await?;
        patch.clone().apply_to(&mut patched);
        NewShift {
            date: patched.date,
            time_start: patched.time_start,
            time_end: patched.time_end,
        }
        .validate()?;
        self.shifts
            .update(id, patch)
            .await?
            .ok_or(SchedulingError::ShiftNotFound(id))
    }

    /// Deletes a shift. Its tasks are not cascaded; they keep their shift
    /// id and compose nowhere.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::ShiftNotFound`] when the id is absent.
    pub async fn delete_shift(&self, id: ShiftId) -> SchedulingResult<()> {
        if !self.shifts.delete(id).await? {
            return Err(SchedulingError::ShiftNotFound(id));
        }
        Ok(())
    }

    /// Creates a task after validating the payload and its shift reference.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Invalid`] for a route task without its
    /// GeoJSON payload, an empty ticket list, or an inverted window, and
    /// [`SchedulingError::UnknownShift`] when the shift does not exist.
    pub async fn create_task(&self, new: NewTask) -> SchedulingResult<Task> {
        new.validate()?;
        self.ensure_shift_exists(new.shift_id).await?;
        Ok(self.tasks.create(new).await?)
    }

    /// Fetches a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::TaskNotFound`] when the id is absent.
    pub async fn task(&self, id: TaskId) -> SchedulingResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(SchedulingError::TaskNotFound(id))
    }

    /// Lists tasks within the page.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks(&self, page: Page) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.list(page).await?)
    }

    /// Lists every task of the shift, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_by_shift(&self, shift_id: ShiftId) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_by_shift(shift_id).await?)
    }

    /// Lists tasks assigned to the executor.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_by_executor(&self, executor: EmployeeId) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_by_executor(executor).await?)
    }

    /// Lists tasks assigned to the robot.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_by_robot(&self, robot_id: RobotId) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_by_robot(robot_id).await?)
    }

    /// Lists tasks allocated the transport.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_by_transport(
        &self,
        transport_id: TransportId,
    ) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_by_transport(transport_id).await?)
    }

    /// Lists tasks of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_by_kind(&self, kind: TaskKind) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_by_kind(kind).await?)
    }

    /// Lists tasks fully contained in the window.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::Store`] on store failure.
    pub async fn tasks_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SchedulingResult<Vec<Task>> {
        Ok(self.tasks.find_in_window(start, end).await?)
    }

    /// Merge-patches a task, re-validating the patched record before the
    /// write.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::TaskNotFound`] when the id is absent,
    /// [`SchedulingError::Invalid`] when the patched record breaks a
    /// domain rule, and [`SchedulingError::UnknownShift`] when the patch
    /// moves the task to a shift that does not exist.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> SchedulingResult<Task> {
        let mut patched = self.task(id).await?;
        patch.clone().apply_to(&mut patched);
        patched.validate()?;
        if let Some(shift_id) = patch.shift_id {
            self.ensure_shift_exists(shift_id).await?;
        }
        self.tasks
            .update(id, patch)
            .await?
            .ok_or(SchedulingError::TaskNotFound(id))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::TaskNotFound`] when the id is absent.
    pub async fn delete_task(&self, id: TaskId) -> SchedulingResult<()> {
        if !self.tasks.delete(id).await? {
            return Err(SchedulingError::TaskNotFound(id));
        }
        Ok(())
    }
}
