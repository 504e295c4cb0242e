//! In-memory robot repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::directory::{
    domain::{NewRobot, Robot, RobotId, RobotPatch},
    ports::{DirectoryStoreError, DirectoryStoreResult, Page, RobotRepository},
};

/// Thread-safe in-memory robot store enforcing business-number uniqueness.
#[derive(Clone)]
pub struct InMemoryRobotRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Robot>,
    next_id: i64,
}

impl State {
    /// Checks the unique index on the business number, ignoring `except`.
    fn number_taken(&self, number: i64, except: Option<RobotId>) -> bool {
        self.rows
            .values()
            .any(|robot| robot.number == number && Some(robot.id) != except)
    }
}

impl InMemoryRobotRepository {
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

impl Default for InMemoryRobotRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RobotRepository for InMemoryRobotRepository {
    async fn create(&self, new: NewRobot) -> DirectoryStoreResult<Robot> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.number_taken(new.number, None) {
            return Err(DirectoryStoreError::DuplicateRobotNumber(new.number));
        }
        state.next_id += 1;
        let id = state.next_id;
        let robot = Robot {
            id: RobotId::from_raw(id),
            number: new.number,
            series: new.series,
            has_blockers: new.has_blockers,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, robot.clone());
        Ok(robot)
    }

    async fn find_by_id(&self, id: RobotId) -> DirectoryStoreResult<Option<Robot>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Robot>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.rows.values().cloned(), page.offset, page.limit))
    }

    async fn update(&self, id: RobotId, patch: RobotPatch) -> DirectoryStoreResult<Option<Robot>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if let Some(number) = patch.number {
            if state.number_taken(number, Some(id)) {
                return Err(DirectoryStoreError::DuplicateRobotNumber(number));
            }
        }
        let Some(robot) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(robot);
        robot.updated_at = now;
        Ok(Some(robot.clone()))
    }

    async fn delete(&self, id: RobotId) -> DirectoryStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
