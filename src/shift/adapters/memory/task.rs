//! In-memory task repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::shift::{
    domain::{NewTask, ShiftId, Task, TaskId, TaskKind, TaskPatch},
    ports::{Page, ShiftStoreResult, TaskRepository},
};

/// Thread-safe in-memory task store.
///
/// The `BTreeMap` keeps rows in id order, so shift listings come back in
/// insertion order without a secondary index.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Task>,
    next_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store stamping rows through the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            clock,
        }
    }

    /// Collects rows matching the predicate, preserving id order.
    fn collect_where(
        &self,
        predicate: impl Fn(&Task) -> bool,
    ) -> ShiftStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect())
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, new: NewTask) -> ShiftStoreResult<Task> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let id = state.next_id;
        let task = Task {
            id: TaskId::from_raw(id),
            shift_id: new.shift_id,
            executor: new.executor,
            robot_id: new.robot_id,
            transport_id: new.transport_id,
            time_start: new.time_start,
            time_end: new.time_end,
            kind: new.kind,
            geojson: new.geojson,
            geojson_filename: new.geojson_filename,
            tickets: new.tickets,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> ShiftStoreResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.rows.values().cloned(), page.offset, page.limit))
    }

    async fn find_by_shift(&self, shift_id: ShiftId) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.shift_id == shift_id)
    }

    async fn find_by_executor(&self, executor: EmployeeId) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.executor == executor)
    }

    async fn find_by_robot(&self, robot_id: RobotId) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.robot_id == robot_id)
    }

    async fn find_by_transport(&self, transport_id: TransportId) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.transport_id == Some(transport_id))
    }

    async fn find_by_kind(&self, kind: TaskKind) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.kind == kind)
    }

    async fn find_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.time_start >= start && task.time_end <= end)
    }

    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Task>> {
        self.collect_where(|task| task.is_active_at(instant))
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> ShiftStoreResult<Option<Task>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(task) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(task);
        task.updated_at = now;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> ShiftStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
