//! In-memory shift repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::shift::{
    domain::{NewShift, Shift, ShiftId, ShiftPatch},
    ports::{Page, ShiftRepository, ShiftStoreResult},
};

/// Thread-safe in-memory shift store.
#[derive(Clone)]
pub struct InMemoryShiftRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Shift>,
    next_id: i64,
}

impl InMemoryShiftRepository {
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
}

impl Default for InMemoryShiftRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShiftRepository for InMemoryShiftRepository {
    async fn create(&self, new: NewShift) -> ShiftStoreResult<Shift> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let id = state.next_id;
        let shift = Shift {
            id: ShiftId::from_raw(id),
            date: new.date,
            time_start: new.time_start,
            time_end: new.time_end,
            edited_at: now,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, shift.clone());
        Ok(shift)
    }

    async fn find_by_id(&self, id: ShiftId) -> ShiftStoreResult<Option<Shift>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(&self, page: Page) -> ShiftStoreResult<Vec<Shift>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.rows.values().cloned(), page.offset, page.limit))
    }

    async fn find_by_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ShiftStoreResult<Vec<Shift>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|shift| start <= shift.date && shift.date <= end)
            .cloned()
            .collect())
    }

    async fn find_active_at(&self, instant: DateTime<Utc>) -> ShiftStoreResult<Vec<Shift>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|shift| shift.is_active_at(instant))
            .cloned()
            .collect())
    }

    async fn update(&self, id: ShiftId, patch: ShiftPatch) -> ShiftStoreResult<Option<Shift>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(shift) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(shift);
        shift.edited_at = now;
        shift.updated_at = now;
        Ok(Some(shift.clone()))
    }

    async fn delete(&self, id: ShiftId) -> ShiftStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
