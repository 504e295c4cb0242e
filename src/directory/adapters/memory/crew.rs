//! In-memory crew repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::directory::{
    domain::{Crew, CrewId, CrewPatch, NewCrew},
    ports::{CrewRepository, DirectoryStoreResult, Page},
};

/// Thread-safe in-memory crew store.
#[derive(Clone)]
pub struct InMemoryCrewRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Crew>,
    next_id: i64,
}

impl InMemoryCrewRepository {
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

impl Default for InMemoryCrewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrewRepository for InMemoryCrewRepository {
    async fn create(&self, new: NewCrew) -> DirectoryStoreResult<Crew> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let id = state.next_id;
        let crew = Crew {
            id: CrewId::from_raw(id),
            name: new.name,
            description: new.description,
            max_members: new.max_members,
            owner_id: new.owner_id,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, crew.clone());
        Ok(crew)
    }

    async fn find_by_id(&self, id: CrewId) -> DirectoryStoreResult<Option<Crew>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Crew>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.rows.values().cloned(), page.offset, page.limit))
    }

    async fn update(&self, id: CrewId, patch: CrewPatch) -> DirectoryStoreResult<Option<Crew>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(crew) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(crew);
        crew.updated_at = now;
        Ok(Some(crew.clone()))
    }

    async fn delete(&self, id: CrewId) -> DirectoryStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
