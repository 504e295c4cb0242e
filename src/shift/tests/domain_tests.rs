//! Domain behaviour tests for shifts and tasks.

use rstest::rstest;
use serde_json::json;

use super::ts;
use crate::directory::domain::{EmployeeId, RobotId, TransportId};
use crate::shift::domain::{
    NewShift, NewTask, ShiftDomainError, ShiftId, Task, TaskId, TaskKind, TaskPatch,
};

fn new_task(kind: TaskKind) -> NewTask {
    NewTask {
        shift_id: ShiftId::from_raw(1),
        executor: EmployeeId::from_raw(1),
        robot_id: RobotId::from_raw(1),
        transport_id: None,
        time_start: ts("2025-03-10T09:00:00Z"),
        time_end: ts("2025-03-10T12:00:00Z"),
        kind,
        geojson: None,
        geojson_filename: None,
        tickets: vec!["ROBOT-101".to_owned()],
    }
}

#[rstest]
#[case("route", TaskKind::Route)]
#[case("Carpet", TaskKind::Carpet)]
#[case(" demo ", TaskKind::Demo)]
#[case("CUSTOM", TaskKind::Custom)]
fn task_kind_parses_case_insensitively(#[case] input: &str, #[case] expected: TaskKind) {
    assert_eq!(TaskKind::try_from(input), Ok(expected));
}

#[rstest]
fn task_kind_rejects_unknown_tags() {
    assert!(TaskKind::try_from("patrol").is_err());
}

#[rstest]
#[case(TaskKind::Route)]
#[case(TaskKind::Carpet)]
#[case(TaskKind::Demo)]
#[case(TaskKind::Custom)]
fn task_kind_round_trips_through_storage_form(#[case] kind: TaskKind) {
    assert_eq!(TaskKind::try_from(kind.as_str()), Ok(kind));
}

#[rstest]
fn route_task_requires_geojson() {
    let task = new_task(TaskKind::Route);

    assert_eq!(
        task.validate(),
        Err(ShiftDomainError::RouteTaskMissingGeojson)
    );
}

#[rstest]
fn route_task_with_geojson_is_valid() {
    let mut task = new_task(TaskKind::Route);
    task.geojson = Some(json!({"type": "FeatureCollection", "features": []}));

    assert_eq!(task.validate(), Ok(()));
}

#[rstest]
fn non_route_task_may_omit_geojson() {
    assert_eq!(new_task(TaskKind::Carpet).validate(), Ok(()));
}

#[rstest]
fn empty_tickets_are_rejected() {
    let mut task = new_task(TaskKind::Demo);
    task.tickets.clear();

    assert_eq!(task.validate(), Err(ShiftDomainError::EmptyTickets));
}

#[rstest]
fn inverted_task_window_is_rejected() {
    let mut task = new_task(TaskKind::Demo);
    task.time_start = ts("2025-03-10T13:00:00Z");

    assert!(matches!(
        task.validate(),
        Err(ShiftDomainError::InvertedTimeWindow { .. })
    ));
}

#[rstest]
fn inverted_shift_window_is_rejected() {
    let shift = NewShift {
        date: ts("2025-03-10T00:00:00Z"),
        time_start: ts("2025-03-10T18:00:00Z"),
        time_end: ts("2025-03-10T09:00:00Z"),
    };

    assert!(matches!(
        shift.validate(),
        Err(ShiftDomainError::InvertedTimeWindow { .. })
    ));
}

#[rstest]
fn zero_length_window_is_valid() {
    let instant = ts("2025-03-10T09:00:00Z");
    let shift = NewShift {
        date: instant,
        time_start: instant,
        time_end: instant,
    };

    assert_eq!(shift.validate(), Ok(()));
}

fn stored_task() -> Task {
    Task {
        id: TaskId::from_raw(7),
        shift_id: ShiftId::from_raw(1),
        executor: EmployeeId::from_raw(1),
        robot_id: RobotId::from_raw(1),
        transport_id: Some(TransportId::from_raw(3)),
        time_start: ts("2025-03-10T09:00:00Z"),
        time_end: ts("2025-03-10T12:00:00Z"),
        kind: TaskKind::Carpet,
        geojson: None,
        geojson_filename: None,
        tickets: vec!["ROBOT-101".to_owned()],
        created_at: ts("2025-03-01T00:00:00Z"),
        updated_at: ts("2025-03-01T00:00:00Z"),
    }
}

#[rstest]
#[case("2025-03-10T09:00:00Z", true)]
#[case("2025-03-10T12:00:00Z", true)]
#[case("2025-03-10T08:59:59Z", false)]
#[case("2025-03-10T12:00:01Z", false)]
fn task_window_is_closed_on_both_ends(#[case] instant: &str, #[case] active: bool) {
    assert_eq!(stored_task().is_active_at(ts(instant)), active);
}

#[rstest]
fn task_patch_releases_transport_with_explicit_null() {
    let mut task = stored_task();
    let patch = TaskPatch {
        transport_id: Some(None),
        ..TaskPatch::default()
    };

    patch.apply_to(&mut task);

    assert_eq!(task.transport_id, None);
    assert_eq!(task.kind, TaskKind::Carpet);
    assert_eq!(task.tickets, vec!["ROBOT-101".to_owned()]);
}

#[rstest]
fn task_patch_leaves_absent_fields_unchanged() {
    let mut task = stored_task();
    let patch = TaskPatch {
        kind: Some(TaskKind::Demo),
        ..TaskPatch::default()
    };

    patch.apply_to(&mut task);

    assert_eq!(task.kind, TaskKind::Demo);
    assert_eq!(task.transport_id, Some(TransportId::from_raw(3)));
    assert_eq!(task.time_start, ts("2025-03-10T09:00:00Z"));
}
