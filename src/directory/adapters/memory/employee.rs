//! In-memory employee repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{lock_poisoned, paginate};
use crate::directory::{
    domain::{CrewId, Employee, EmployeeId, EmployeePatch, NewEmployee},
    ports::{DirectoryStoreResult, EmployeeFilter, EmployeeRepository, Page},
};

/// Thread-safe in-memory employee store.
#[derive(Clone)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl InMemoryEmployeeRepository {
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

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, new: NewEmployee) -> DirectoryStoreResult<Employee> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let id = state.next_id;
        let employee = Employee {
            id: EmployeeId::from_raw(id),
            firstname: new.firstname,
            lastname: new.lastname,
            patronymic: new.patronymic,
            tg: new.tg,
            staff: new.staff,
            body: new.body,
            drive: new.drive,
            parking: new.parking,
            telemedicine: new.telemedicine,
            attorney: new.attorney,
            auto_vc_access: new.auto_vc_access,
            crew: new.crew,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: EmployeeId) -> DirectoryStoreResult<Option<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.rows.get(&id.value()).cloned())
    }

    async fn list(
        &self,
        page: Page,
        filter: &EmployeeFilter,
    ) -> DirectoryStoreResult<Vec<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let rows = state
            .rows
            .values()
            .filter(|employee| filter.matches(employee))
            .cloned();
        Ok(paginate(rows, page.offset, page.limit))
    }

    async fn find_by_crew(&self, crew: CrewId) -> DirectoryStoreResult<Vec<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|employee| employee.crew == Some(crew))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> DirectoryStoreResult<Option<Employee>> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(employee) = state.rows.get_mut(&id.value()) else {
            return Ok(None);
        };
        patch.apply_to(employee);
        employee.updated_at = now;
        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: EmployeeId) -> DirectoryStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.rows.remove(&id.value()).is_some())
    }
}
