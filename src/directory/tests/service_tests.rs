//! Service orchestration tests for directory CRUD and validation.

use std::sync::Arc;

use rstest::{fixture, rstest};

use crate::directory::{
    adapters::memory::{
        InMemoryCrewRepository, InMemoryEmployeeRepository, InMemoryRobotRepository,
        InMemoryTransportRepository,
    },
    domain::{CrewId, EmployeeId, EmployeePatch, NewCrew, NewEmployee, NewRobot, RobotPatch},
    ports::{EmployeeFilter, Page},
    services::{DirectoryError, DirectoryService, ErrorKind},
};

#[fixture]
fn service() -> DirectoryService {
    DirectoryService::new(
        Arc::new(InMemoryEmployeeRepository::new()),
        Arc::new(InMemoryTransportRepository::new()),
        Arc::new(InMemoryRobotRepository::new()),
        Arc::new(InMemoryCrewRepository::new()),
    )
}

fn new_employee(firstname: &str, crew: Option<CrewId>) -> NewEmployee {
    NewEmployee {
        firstname: firstname.to_owned(),
        lastname: "Волков".to_owned(),
        patronymic: None,
        tg: None,
        staff: None,
        body: Some("SDG".to_owned()),
        drive: false,
        parking: false,
        telemedicine: false,
        attorney: false,
        auto_vc_access: false,
        crew,
    }
}

fn new_crew(name: &str) -> NewCrew {
    NewCrew {
        name: name.to_owned(),
        description: None,
        max_members: NewCrew::DEFAULT_MAX_MEMBERS,
        owner_id: 1,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_employee_rejects_unknown_crew(service: DirectoryService) {
    let result = service
        .create_employee(new_employee("Данил", Some(CrewId::from_raw(99))))
        .await;

    let Err(err) = result else {
        panic!("expected validation failure");
    };
    assert!(matches!(err, DirectoryError::UnknownCrew(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_employee_accepts_existing_crew(service: DirectoryService) {
    let crew = service
        .create_crew(new_crew("Night shift"))
        .await
        .expect("crew creation should succeed");

    let employee = service
        .create_employee(new_employee("Данил", Some(crew.id)))
        .await
        .expect("employee creation should succeed");

    assert_eq!(employee.crew, Some(crew.id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_employee_merges_only_present_fields(service: DirectoryService) {
    let crew = service
        .create_crew(new_crew("Day shift"))
        .await
        .expect("crew creation should succeed");
    let created = service
        .create_employee(new_employee("Данил", Some(crew.id)))
        .await
        .expect("employee creation should succeed");

    let patch = EmployeePatch {
        parking: Some(true),
        ..EmployeePatch::default()
    };
    let updated = service
        .update_employee(created.id, patch)
        .await
        .expect("update should succeed");

    assert!(updated.parking);
    assert_eq!(updated.firstname, created.firstname);
    assert_eq!(updated.lastname, created.lastname);
    assert_eq!(updated.crew, created.crew);
    assert_eq!(updated.body, created.body);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_employee_rejects_unknown_crew(service: DirectoryService) {
    let created = service
        .create_employee(new_employee("Данил", None))
        .await
        .expect("employee creation should succeed");

    let patch = EmployeePatch {
        crew: Some(Some(CrewId::from_raw(42))),
        ..EmployeePatch::default()
    };
    let result = service.update_employee(created.id, patch).await;

    assert!(matches!(result, Err(DirectoryError::UnknownCrew(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_employee_reports_not_found(service: DirectoryService) {
    let result = service.delete_employee(EmployeeId::from_raw(404)).await;

    let Err(err) = result else {
        panic!("expected not-found failure");
    };
    assert!(matches!(err, DirectoryError::EmployeeNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_robot_number_is_rejected(service: DirectoryService) {
    service
        .create_robot(NewRobot {
            number: 120,
            series: 3,
            has_blockers: false,
        })
        .await
        .expect("first robot should be created");

    let duplicate = service
        .create_robot(NewRobot {
            number: 120,
            series: 4,
            has_blockers: false,
        })
        .await;

    assert!(matches!(
        duplicate,
        Err(DirectoryError::DuplicateRobotNumber(120))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn robot_update_cannot_steal_existing_number(service: DirectoryService) {
    service
        .create_robot(NewRobot {
            number: 120,
            series: 3,
            has_blockers: false,
        })
        .await
        .expect("first robot should be created");
    let second = service
        .create_robot(NewRobot {
            number: 121,
            series: 3,
            has_blockers: false,
        })
        .await
        .expect("second robot should be created");

    let patch = RobotPatch {
        number: Some(120),
        ..RobotPatch::default()
    };
    let result = service.update_robot(second.id, patch).await;

    assert!(matches!(
        result,
        Err(DirectoryError::DuplicateRobotNumber(120))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_bodies_are_distinct_and_sorted(service: DirectoryService) {
    for (name, body) in [("A", "SDG"), ("B", "Ops"), ("C", "SDG"), ("D", "  ")] {
        let mut employee = new_employee(name, None);
        employee.body = Some(body.to_owned());
        service
            .create_employee(employee)
            .await
            .expect("employee creation should succeed");
    }

    let bodies = service
        .employee_bodies()
        .await
        .expect("listing should succeed");

    assert_eq!(bodies, vec!["Ops".to_owned(), "SDG".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_listing_honours_filter_and_page(service: DirectoryService) {
    for name in ["A", "B", "C"] {
        service
            .create_employee(new_employee(name, None))
            .await
            .expect("employee creation should succeed");
    }

    let filter = EmployeeFilter {
        body: Some("sdg".to_owned()),
        ..EmployeeFilter::default()
    };
    let all = service
        .employees(Page::default(), &filter)
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 3);

    let window = service
        .employees(Page::new(1, 1), &filter)
        .await
        .expect("listing should succeed");
    assert_eq!(window.len(), 1);
    assert_eq!(window.first().map(|e| e.firstname.clone()), Some("B".to_owned()));
}
