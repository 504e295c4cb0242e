//! Enrichment and composition tests over the in-memory adapters.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::ts;
use crate::directory::adapters::memory::{
    InMemoryEmployeeRepository, InMemoryRobotRepository, InMemoryTransportRepository,
};
use crate::directory::domain::{
    Employee, EmployeeId, NewEmployee, NewRobot, NewTransport, Robot, RobotId, Transport,
    TransportId,
};
use crate::directory::ports::{EmployeeRepository, RobotRepository, TransportRepository};
use crate::directory::services::ErrorKind;
use crate::shift::adapters::memory::{InMemoryShiftRepository, InMemoryTaskRepository};
use crate::shift::domain::{NewShift, NewTask, Shift, ShiftId, Task, TaskKind};
use crate::shift::ports::{ShiftRepository, TaskRepository};
use crate::shift::services::{ComposeError, ShiftComposer, TaskEnricher};

struct Harness {
    employees: Arc<InMemoryEmployeeRepository>,
    transports: Arc<InMemoryTransportRepository>,
    robots: Arc<InMemoryRobotRepository>,
    shifts: Arc<InMemoryShiftRepository>,
    tasks: Arc<InMemoryTaskRepository>,
    enricher: TaskEnricher,
    composer: ShiftComposer,
}

#[fixture]
fn harness() -> Harness {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let transports = Arc::new(InMemoryTransportRepository::new());
    let robots = Arc::new(InMemoryRobotRepository::new());
    let shifts = Arc::new(InMemoryShiftRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let enricher = TaskEnricher::new(
        Arc::clone(&employees) as Arc<dyn EmployeeRepository>,
        Arc::clone(&transports) as Arc<dyn TransportRepository>,
        Arc::clone(&robots) as Arc<dyn RobotRepository>,
    );
    let composer = ShiftComposer::new(
        Arc::clone(&shifts) as Arc<dyn ShiftRepository>,
        Arc::clone(&tasks) as Arc<dyn TaskRepository>,
        enricher.clone(),
    );
    Harness {
        employees,
        transports,
        robots,
        shifts,
        tasks,
        enricher,
        composer,
    }
}

async fn seed_employee(harness: &Harness, patronymic: Option<&str>) -> Employee {
    harness
        .employees
        .create(NewEmployee {
            firstname: "Данил".to_owned(),
            lastname: "Волков".to_owned(),
            patronymic: patronymic.map(str::to_owned),
            tg: None,
            staff: None,
            body: None,
            drive: true,
            parking: false,
            telemedicine: false,
            attorney: false,
            auto_vc_access: false,
            crew: None,
        })
        .await
        .expect("employee creation should succeed")
}

async fn seed_robot(harness: &Harness, number: i64) -> Robot {
    harness
        .robots
        .create(NewRobot {
            number,
            series: 3,
            has_blockers: false,
        })
        .await
        .expect("robot creation should succeed")
}

async fn seed_transport(harness: &Harness) -> Transport {
    harness
        .transports
        .create(NewTransport {
            name: "Lada Largus".to_owned(),
            model: Some("Largus".to_owned()),
            gov_number: Some("А123БВ77".to_owned()),
            carsharing: false,
            corporate: true,
            auto_vc: false,
            has_blockers: false,
        })
        .await
        .expect("transport creation should succeed")
}

async fn seed_shift(harness: &Harness) -> Shift {
    harness
        .shifts
        .create(NewShift {
            date: ts("2025-03-10T00:00:00Z"),
            time_start: ts("2025-03-10T09:00:00Z"),
            time_end: ts("2025-03-10T18:00:00Z"),
        })
        .await
        .expect("shift creation should succeed")
}

async fn seed_task(
    harness: &Harness,
    shift_id: ShiftId,
    executor: EmployeeId,
    robot_id: RobotId,
    transport_id: Option<TransportId>,
) -> Task {
    harness
        .tasks
        .create(NewTask {
            shift_id,
            executor,
            robot_id,
            transport_id,
            time_start: ts("2025-03-10T09:00:00Z"),
            time_end: ts("2025-03-10T12:00:00Z"),
            kind: TaskKind::Carpet,
            geojson: None,
            geojson_filename: None,
            tickets: vec!["ROBOT-101".to_owned()],
        })
        .await
        .expect("task creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enrichment_joins_all_display_fields(harness: Harness) {
    let employee = seed_employee(&harness, Some("Сергеевич")).await;
    let robot = seed_robot(&harness, 120).await;
    let transport = seed_transport(&harness).await;
    let shift = seed_shift(&harness).await;
    let task = seed_task(&harness, shift.id, employee.id, robot.id, Some(transport.id)).await;

    let enriched = harness
        .enricher
        .enrich(task.clone())
        .await
        .expect("enrichment should succeed");

    assert_eq!(
        enriched.executor_name,
        Some("Данил Волков Сергеевич".to_owned())
    );
    assert_eq!(enriched.robot_number, 120);
    assert_eq!(enriched.transport_name, Some("Lada Largus".to_owned()));
    assert_eq!(enriched.transport_gov_number, Some("А123БВ77".to_owned()));
    assert_eq!(enriched.id, task.id);
    assert_eq!(enriched.tickets, task.tickets);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn executor_name_omits_missing_patronymic(harness: Harness) {
    let employee = seed_employee(&harness, None).await;
    let robot = seed_robot(&harness, 7).await;
    let shift = seed_shift(&harness).await;
    let task = seed_task(&harness, shift.id, employee.id, robot.id, None).await;

    let enriched = harness
        .enricher
        .enrich(task)
        .await
        .expect("enrichment should succeed");

    assert_eq!(enriched.executor_name, Some("Данил Волков".to_owned()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_references_degrade_instead_of_failing(harness: Harness) {
    let shift = seed_shift(&harness).await;
    let task = seed_task(
        &harness,
        shift.id,
        EmployeeId::from_raw(404),
        RobotId::from_raw(404),
        Some(TransportId::from_raw(404)),
    )
    .await;

    let enriched = harness
        .enricher
        .enrich(task)
        .await
        .expect("enrichment should tolerate dangling references");

    assert_eq!(enriched.executor_name, None);
    assert_eq!(enriched.transport_name, None);
    assert_eq!(enriched.transport_gov_number, None);
    // The raw id stands in for the business number.
    assert_eq!(enriched.robot_number, 404);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn composer_returns_tasks_in_id_order(harness: Harness) {
    let employee = seed_employee(&harness, None).await;
    let robot = seed_robot(&harness, 7).await;
    let shift = seed_shift(&harness).await;
    let other_shift = seed_shift(&harness).await;
    let first = seed_task(&harness, shift.id, employee.id, robot.id, None).await;
    seed_task(&harness, other_shift.id, employee.id, robot.id, None).await;
    let second = seed_task(&harness, shift.id, employee.id, robot.id, None).await;

    let composed = harness
        .composer
        .compose(shift.id)
        .await
        .expect("composition should succeed");

    assert_eq!(composed.id, shift.id);
    assert_eq!(
        composed.tasks.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shift_without_tasks_composes_to_empty_list(harness: Harness) {
    let shift = seed_shift(&harness).await;

    let composed = harness
        .composer
        .compose(shift.id)
        .await
        .expect("composition should succeed");

    assert!(composed.tasks.is_empty());
    assert_eq!(composed.time_start, shift.time_start);
    assert_eq!(composed.time_end, shift.time_end);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn composer_reports_unknown_shift(harness: Harness) {
    let result = harness.composer.compose(ShiftId::from_raw(404)).await;

    let Err(err) = result else {
        panic!("expected not-found failure");
    };
    assert!(matches!(err, ComposeError::ShiftNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
