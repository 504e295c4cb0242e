//! Task enrichment: joins denormalized display fields onto task records.

use crate::directory::domain::{Employee, Transport};
use crate::directory::ports::{
    DirectoryStoreResult, EmployeeRepository, RobotRepository, TransportRepository,
};
use crate::shift::domain::{EnrichedTask, Task};
use std::sync::Arc;

/// Resolves display fields for tasks from the reference repositories.
///
/// Absence is never an error here: a task whose executor, robot, or
/// transport has been deleted still enriches, it just loses the display
/// fields. The robot number falls back to the raw robot id so the caller
/// always sees a number. Only store failures propagate.
#[derive(Clone)]
pub struct TaskEnricher {
    employees: Arc<dyn EmployeeRepository>,
    transports: Arc<dyn TransportRepository>,
    robots: Arc<dyn RobotRepository>,
}

impl TaskEnricher {
    /// Creates an enricher over the reference repositories.
    #[must_use]
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        transports: Arc<dyn TransportRepository>,
        robots: Arc<dyn RobotRepository>,
    ) -> Self {
        Self {
            employees,
            transports,
            robots,
        }
    }

    /// Builds the flat enriched view of a task.
    ///
    /// # Errors
    ///
    /// Returns a store error when a lookup fails; a missing referenced
    /// entity is not a failure.
    pub async fn enrich(&self, task: Task) -> DirectoryStoreResult<EnrichedTask> {
        let executor_name = self
            .employees
            .find_by_id(task.executor)
            .await?
            .map(|employee: Employee| employee.full_name());
        let robot_number = self
            .robots
            .find_by_id(task.robot_id)
            .await?
            .map_or_else(|| task.robot_id.value(), |robot| robot.number);
        let transport = match task.transport_id {
            Some(transport_id) => self.transports.find_by_id(transport_id).await?,
            None => None,
        };
        let (transport_name, transport_gov_number) = transport
            .map_or((None, None), |transport: Transport| {
                (Some(transport.name), transport.gov_number)
            });
        Ok(EnrichedTask {
            id: task.id,
            shift_id: task.shift_id,
            executor: task.executor,
            robot_number,
            transport_id: task.transport_id,
            time_start: task.time_start,
            time_end: task.time_end,
            kind: task.kind,
            geojson: task.geojson,
            geojson_filename: task.geojson_filename,
            tickets: task.tickets,
            created_at: task.created_at,
            updated_at: task.updated_at,
            executor_name,
            transport_name,
            transport_gov_number,
        })
    }

    /// Enriches a batch of tasks, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first store error; no partial batch is returned.
    pub async fn enrich_all(&self, tasks: Vec<Task>) -> DirectoryStoreResult<Vec<EnrichedTask>> {
        let mut enriched = Vec::with_capacity(tasks.len());
        for task in tasks {
            enriched.push(self.enrich(task).await?);
        }
        Ok(enriched)
    }
}
