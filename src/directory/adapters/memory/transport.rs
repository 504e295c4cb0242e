//! In-memory transport repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::directory::{
    domain::{NewTransport, Transport, TransportId, TransportPatch},
    ports::{DirectoryStoreResult, Page, TransportRepository},
};

/// Thread-safe in-memory transport store.
#[derive(Clone)]
pub struct InMemoryTransportRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Transport>,
    next_id: i64,
}

impl InMemoryTransportRepository {
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

impl Default for InMemoryTransportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportRepository for InMemoryTransportRepository {
    async fn create(&self, new: NewTransport) -> DirectoryStoreResult<Transport> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let id = state.next_id;
        let transport = Transport {
            id: TransportId::from_raw(id),
            name: new.name,
            model: new.model,
            gov_number: new.gov_number,
            carsharing: new.carsharing,
            corporate: new.corporate,
            auto_vc: new.auto_vc,
            has_blockers: new.has_blockers,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, transport.clone());
        Ok(transport)
    }

    async fn find_by_id(&self, id: TransportId) -> DirectoryStoreResult<Option<Transport>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(&self, page: Page) -> DirectoryStoreResult<Vec<Transport>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.rows.values().cloned(), page.offset, page.limit))
    }

    async fn update(
        &self,
        id: TransportId,
        patch: TransportPatch,
    ) -> DirectoryStoreResult<Option<Transport>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(transport) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(transport);
        transport.updated_at = now;
        Ok(Some(transport.clone()))
    }

    async fn delete(&self, id: TransportId) -> DirectoryStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
