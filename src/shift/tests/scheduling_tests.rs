//! Scheduling service tests: boundary validation and CRUD behaviour.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;

use super::ts;
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::directory::services::ErrorKind;
use crate::shift::adapters::memory::{InMemoryShiftRepository, InMemoryTaskRepository};
use crate::shift::domain::{NewShift, NewTask, Shift, ShiftId, ShiftPatch, TaskId, TaskKind, TaskPatch};
use crate::shift::ports::{Page, ShiftRepository, TaskRepository};
use crate::shift::services::{SchedulingError, SchedulingService};

#[fixture]
fn service() -> SchedulingService {
    SchedulingService::new(
        Arc::new(InMemoryShiftRepository::new()) as Arc<dyn ShiftRepository>,
        Arc::new(InMemoryTaskRepository::new()) as Arc<dyn TaskRepository>,
    )
}

fn new_shift() -> NewShift {
    NewShift {
        date: ts("2025-03-10T00:00:00Z"),
        time_start: ts("2025-03-10T09:00:00Z"),
        time_end: ts("2025-03-10T18:00:00Z"),
    }
}

fn new_task(shift_id: ShiftId, kind: TaskKind) -> NewTask {
    NewTask {
        shift_id,
        executor: EmployeeId::from_raw(1),
        robot_id: RobotId::from_raw(1),
        transport_id: Some(TransportId::from_raw(1)),
        time_start: ts("2025-03-10T09:00:00Z"),
        time_end: ts("2025-03-10T12:00:00Z"),
        kind,
        geojson: None,
        geojson_filename: None,
        tickets: vec!["ROBOT-101".to_owned()],
    }
}

async fn seeded_shift(service: &SchedulingService) -> Shift {
    service
        .create_shift(new_shift())
        .await
        .expect("shift creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_shift_rejects_inverted_window(service: SchedulingService) {
    let mut shift = new_shift();
    shift.time_end = ts("2025-03-10T08:00:00Z");

    let result = service.create_shift(shift).await;

    let Err(err) = result else {
        panic!("expected validation failure");
    };
    assert!(matches!(err, SchedulingError::Invalid(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_shift_rejects_patch_that_inverts_window(service: SchedulingService) {
    let shift = seeded_shift(&service).await;

    let patch = ShiftPatch {
        time_end: Some(ts("2025-03-10T08:00:00Z")),
        ..ShiftPatch::default()
    };
    let result = service.update_shift(shift.id, patch).await;
    assert!(matches!(result, Err(SchedulingError::Invalid(_))));

    // Nothing was written.
    let unchanged = service.shift(shift.id).await.expect("shift should exist");
    assert_eq!(unchanged.time_end, shift.time_end);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_shift_bumps_edited_at(service: SchedulingService) {
    let shift = seeded_shift(&service).await;

    let patch = ShiftPatch {
        time_end: Some(ts("2025-03-10T19:00:00Z")),
        ..ShiftPatch::default()
    };
    let updated = service
        .update_shift(shift.id, patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.time_end, ts("2025-03-10T19:00:00Z"));
    assert_eq!(updated.time_start, shift.time_start);
    assert!(updated.edited_at >= shift.edited_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_shift_reports_not_found(service: SchedulingService) {
    let result = service.delete_shift(ShiftId::from_raw(404)).await;

    let Err(err) = result else {
        panic!("expected not-found failure");
    };
    assert!(matches!(err, SchedulingError::ShiftNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_shift(service: SchedulingService) {
    let result = service
        .create_task(new_task(ShiftId::from_raw(99), TaskKind::Demo))
        .await;

    let Err(err) = result else {
        panic!("expected validation failure");
    };
    assert!(matches!(err, SchedulingError::UnknownShift(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_route_without_geojson(service: SchedulingService) {
    let shift = seeded_shift(&service).await;

    let result = service.create_task(new_task(shift.id, TaskKind::Route)).await;

    assert!(matches!(result, Err(SchedulingError::Invalid(_))));
    let leftovers = service
        .tasks(Page::default())
        .await
        .expect("listing should succeed");
    assert!(leftovers.is_empty(), "rejected payload must not be written");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_accepts_route_with_geojson(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let mut task = new_task(shift.id, TaskKind::Route);
    task.geojson = Some(json!({"type": "FeatureCollection", "features": []}));
    task.geojson_filename = Some("route-120.geojson".to_owned());

    let created = service
        .create_task(task)
        .await
        .expect("task creation should succeed");

    assert_eq!(created.kind, TaskKind::Route);
    assert_eq!(created.geojson_filename, Some("route-120.geojson".to_owned()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_empty_tickets(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let mut task = new_task(shift.id, TaskKind::Demo);
    task.tickets.clear();

    let result = service.create_task(task).await;

    assert!(matches!(result, Err(SchedulingError::Invalid(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_merges_only_present_fields(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let created = service
        .create_task(new_task(shift.id, TaskKind::Demo))
        .await
        .expect("task creation should succeed");

    let patch = TaskPatch {
        transport_id: Some(None),
        ..TaskPatch::default()
    };
    let updated = service
        .update_task(created.id, patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.transport_id, None);
    assert_eq!(updated.kind, created.kind);
    assert_eq!(updated.tickets, created.tickets);
    assert_eq!(updated.time_start, created.time_start);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_revalidates_patched_record(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let created = service
        .create_task(new_task(shift.id, TaskKind::Demo))
        .await
        .expect("task creation should succeed");

    // Switching to route without a payload breaks the route rule.
    let patch = TaskPatch {
        kind: Some(TaskKind::Route),
        ..TaskPatch::default()
    };
    let result = service.update_task(created.id, patch).await;
    assert!(matches!(result, Err(SchedulingError::Invalid(_))));

    let unchanged = service.task(created.id).await.expect("task should exist");
    assert_eq!(unchanged.kind, TaskKind::Demo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_rejects_move_to_unknown_shift(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let created = service
        .create_task(new_task(shift.id, TaskKind::Demo))
        .await
        .expect("task creation should succeed");

    let patch = TaskPatch {
        shift_id: Some(ShiftId::from_raw(99)),
        ..TaskPatch::default()
    };
    let result = service.update_task(created.id, patch).await;

    assert!(matches!(result, Err(SchedulingError::UnknownShift(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_reports_not_found(service: SchedulingService) {
    let result = service.delete_task(TaskId::from_raw(404)).await;

    let Err(err) = result else {
        panic!("expected not-found failure");
    };
    assert!(matches!(err, SchedulingError::TaskNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_listings_filter_by_reference(service: SchedulingService) {
    let shift = seeded_shift(&service).await;
    let other = seeded_shift(&service).await;
    let mine = service
        .create_task(new_task(shift.id, TaskKind::Demo))
        .await
        .expect("task creation should succeed");
    let mut foreign = new_task(other.id, TaskKind::Carpet);
    foreign.executor = EmployeeId::from_raw(2);
    foreign.robot_id = RobotId::from_raw(2);
    let foreign = service
        .create_task(foreign)
        .await
        .expect("task creation should succeed");

    let by_shift = service
        .tasks_by_shift(shift.id)
        .await
        .expect("listing should succeed");
    assert_eq!(by_shift.iter().map(|t| t.id).collect::<Vec<_>>(), vec![mine.id]);

    let by_executor = service
        .tasks_by_executor(EmployeeId::from_raw(2))
        .await
        .expect("listing should succeed");
    assert_eq!(
        by_executor.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![foreign.id]
    );

    let by_kind = service
        .tasks_by_kind(TaskKind::Carpet)
        .await
        .expect("listing should succeed");
    assert_eq!(by_kind.len(), 1);

    let by_robot = service
        .tasks_by_robot(RobotId::from_raw(1))
        .await
        .expect("listing should succeed");
    assert_eq!(by_robot.len(), 1);

    let by_transport = service
        .tasks_by_transport(TransportId::from_raw(1))
        .await
        .expect("listing should succeed");
    assert_eq!(by_transport.len(), 2);
}
