//! Behavioural integration test for the scheduling core.
//!
//! Exercises the public crate surface end to end over the in-memory
//! adapters: reference data is registered through the directory service, a
//! shift is planned and staffed through the scheduling service, and the
//! result is read back through composition and the temporal queries.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rostrum::directory::{
    adapters::memory::{
        InMemoryCrewRepository, InMemoryEmployeeRepository, InMemoryRobotRepository,
        InMemoryTransportRepository,
    },
    domain::{NewCrew, NewEmployee, NewRobot, NewTransport},
    ports::{EmployeeRepository, RobotRepository, TransportRepository},
    services::DirectoryService,
};
use rostrum::shift::{
    adapters::memory::{InMemoryShiftRepository, InMemoryTaskRepository},
    domain::{NewShift, NewTask, TaskKind},
    ports::{ShiftRepository, TaskRepository},
    services::{SchedulingService, ShiftComposer, TaskEnricher, TemporalQueryService},
};
use rostrum::tickets::TicketExtractor;
use serde_json::json;

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid timestamp")
}

struct App {
    directory: DirectoryService,
    scheduling: SchedulingService,
    composer: ShiftComposer,
    temporal: TemporalQueryService,
}

fn app() -> App {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let transports = Arc::new(InMemoryTransportRepository::new());
    let robots = Arc::new(InMemoryRobotRepository::new());
    let crews = Arc::new(InMemoryCrewRepository::new());
    let shifts = Arc::new(InMemoryShiftRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());

    let directory = DirectoryService::new(
        Arc::clone(&employees) as Arc<dyn EmployeeRepository>,
        Arc::clone(&transports) as Arc<dyn TransportRepository>,
        Arc::clone(&robots) as Arc<dyn RobotRepository>,
        crews,
    );
    let scheduling = SchedulingService::new(
        Arc::clone(&shifts) as Arc<dyn ShiftRepository>,
        Arc::clone(&tasks) as Arc<dyn TaskRepository>,
    );
    let enricher = TaskEnricher::new(
        employees as Arc<dyn EmployeeRepository>,
        transports as Arc<dyn TransportRepository>,
        robots as Arc<dyn RobotRepository>,
    );
    let composer = ShiftComposer::new(
        Arc::clone(&shifts) as Arc<dyn ShiftRepository>,
        Arc::clone(&tasks) as Arc<dyn TaskRepository>,
        enricher,
    );
    let temporal = TemporalQueryService::new(
        shifts as Arc<dyn ShiftRepository>,
        tasks as Arc<dyn TaskRepository>,
        composer.clone(),
    );
    App {
        directory,
        scheduling,
        composer,
        temporal,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn staffed_shift_round_trips_through_composition_and_queries() {
    let app = app();

    let crew = app
        .directory
        .create_crew(NewCrew {
            name: "Night shift".to_owned(),
            description: None,
            max_members: NewCrew::DEFAULT_MAX_MEMBERS,
            owner_id: 1,
        })
        .await
        .expect("crew creation should succeed");
    let operator = app
        .directory
        .create_employee(NewEmployee {
            firstname: "Данил".to_owned(),
            lastname: "Волков".to_owned(),
            patronymic: Some("Сергеевич".to_owned()),
            tg: Some("@dvolkov".to_owned()),
            staff: None,
            body: Some("SDG".to_owned()),
            drive: true,
            parking: true,
            telemedicine: false,
            attorney: false,
            auto_vc_access: false,
            crew: Some(crew.id),
        })
        .await
        .expect("employee creation should succeed");
    let robot = app
        .directory
        .create_robot(NewRobot {
            number: 120,
            series: 3,
            has_blockers: false,
        })
        .await
        .expect("robot creation should succeed");
    let transport = app
        .directory
        .create_transport(NewTransport {
            name: "Lada Largus".to_owned(),
            model: Some("Largus".to_owned()),
            gov_number: Some("А123БВ77".to_owned()),
            carsharing: false,
            corporate: true,
            auto_vc: false,
            has_blockers: false,
        })
        .await
        .expect("transport creation should succeed");

    let shift = app
        .scheduling
        .create_shift(NewShift {
            date: ts("2025-03-10T00:00:00Z"),
            time_start: ts("2025-03-10T09:00:00Z"),
            time_end: ts("2025-03-10T18:00:00Z"),
        })
        .await
        .expect("shift creation should succeed");

    let geojson = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"description": "resurvey SDGLOGISTICS-482874"},
            "geometry": {"type": "LineString", "coordinates": [[37.6, 55.7], [37.7, 55.8]]}
        }]
    });
    let tickets = TicketExtractor::new().extract(&geojson);
    assert_eq!(tickets, vec!["st.yandex-team.ru/SDGLOGISTICS-482874".to_owned()]);

    let task = app
        .scheduling
        .create_task(NewTask {
            shift_id: shift.id,
            executor: operator.id,
            robot_id: robot.id,
            transport_id: Some(transport.id),
            time_start: ts("2025-03-10T09:00:00Z"),
            time_end: ts("2025-03-10T13:00:00Z"),
            kind: TaskKind::Route,
            geojson: Some(geojson),
            geojson_filename: Some("route-120.geojson".to_owned()),
            tickets,
        })
        .await
        .expect("task creation should succeed");

    // Composition joins every display field.
    let composed = app
        .composer
        .compose(shift.id)
        .await
        .expect("composition should succeed");
    assert_eq!(composed.tasks.len(), 1);
    let enriched = composed.tasks.first().expect("one enriched task");
    assert_eq!(enriched.id, task.id);
    assert_eq!(enriched.robot_number, 120);
    assert_eq!(
        enriched.executor_name,
        Some("Данил Волков Сергеевич".to_owned())
    );
    assert_eq!(enriched.transport_name, Some("Lada Largus".to_owned()));
    assert_eq!(enriched.transport_gov_number, Some("А123БВ77".to_owned()));

    // The calendar view finds the same composite on the shift's day only.
    let planned_day: NaiveDate = "2025-03-10".parse().expect("valid date");
    let on_day = app
        .temporal
        .shifts_on_date(planned_day)
        .await
        .expect("query should succeed");
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day.first().map(|s| s.tasks.len()), Some(1));

    let day_after: NaiveDate = "2025-03-11".parse().expect("valid date");
    assert!(
        app.temporal
            .shifts_on_date(day_after)
            .await
            .expect("query should succeed")
            .is_empty()
    );

    // Mid-window the shift and its task both report active.
    let mid_window = Some(ts("2025-03-10T12:00:00Z"));
    assert_eq!(
        app.temporal
            .active_shifts(mid_window)
            .await
            .expect("query should succeed")
            .len(),
        1
    );
    assert_eq!(
        app.temporal
            .active_tasks(mid_window)
            .await
            .expect("query should succeed")
            .len(),
        1
    );

    // Deleting the operator degrades enrichment instead of breaking it.
    app.directory
        .delete_employee(operator.id)
        .await
        .expect("deletion should succeed");
    let composed = app
        .composer
        .compose(shift.id)
        .await
        .expect("composition should tolerate dangling references");
    assert_eq!(
        composed.tasks.first().and_then(|t| t.executor_name.clone()),
        None
    );
}
