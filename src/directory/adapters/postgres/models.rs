//! Diesel row models for roster reference tables.

use super::schema::{crews, employees, robots, transports};
use crate::directory::domain::{
    Crew, CrewId, Employee, EmployeeId, NewCrew, NewEmployee, NewRobot, NewTransport, Robot,
    RobotId, Transport, TransportId,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Messaging handle.
    pub tg: Option<String>,
    /// Staff directory tag.
    pub staff: Option<String>,
    /// Body/group tag.
    pub body: Option<String>,
    /// Licensed to drive transport.
    pub drive: bool,
    /// Holds a parking permit.
    pub parking: bool,
    /// Passed the telemedicine check.
    pub telemedicine: bool,
    /// Holds a power of attorney.
    pub attorney: bool,
    /// Has access to the auto-VC system.
    pub auto_vc_access: bool,
    /// Crew membership.
    pub crew: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::from_raw(row.id),
            firstname: row.firstname,
            lastname: row.lastname,
            patronymic: row.patronymic,
            tg: row.tg,
            staff: row.staff,
            body: row.body,
            drive: row.drive,
            parking: row.parking,
            telemedicine: row.telemedicine,
            attorney: row.attorney,
            auto_vc_access: row.auto_vc_access,
            crew: row.crew.map(CrewId::from_raw),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert model for employee records; the id is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Messaging handle.
    pub tg: Option<String>,
    /// Staff directory tag.
    pub staff: Option<String>,
    /// Body/group tag.
    pub body: Option<String>,
    /// Licensed to drive transport.
    pub drive: bool,
    /// Holds a parking permit.
    pub parking: bool,
    /// Passed the telemedicine check.
    pub telemedicine: bool,
    /// Holds a power of attorney.
    pub attorney: bool,
    /// Has access to the auto-VC system.
    pub auto_vc_access: bool,
    /// Crew membership.
    pub crew: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewEmployeeRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub fn from_new(new: NewEmployee, now: DateTime<Utc>) -> Self {
        Self {
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
            crew: new.crew.map(CrewId::value),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset written after a merge-patch is applied in the domain.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeChangeset {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Messaging handle.
    pub tg: Option<String>,
    /// Staff directory tag.
    pub staff: Option<String>,
    /// Body/group tag.
    pub body: Option<String>,
    /// Licensed to drive transport.
    pub drive: bool,
    /// Holds a parking permit.
    pub parking: bool,
    /// Passed the telemedicine check.
    pub telemedicine: bool,
    /// Holds a power of attorney.
    pub attorney: bool,
    /// Has access to the auto-VC system.
    pub auto_vc_access: bool,
    /// Crew membership.
    pub crew: Option<i64>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl EmployeeChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub fn from_domain(employee: &Employee) -> Self {
        Self {
            firstname: employee.firstname.clone(),
            lastname: employee.lastname.clone(),
            patronymic: employee.patronymic.clone(),
            tg: employee.tg.clone(),
            staff: employee.staff.clone(),
            body: employee.body.clone(),
            drive: employee.drive,
            parking: employee.parking,
            telemedicine: employee.telemedicine,
            attorney: employee.attorney,
            auto_vc_access: employee.auto_vc_access,
            crew: employee.crew.map(CrewId::value),
            updated_at: employee.updated_at,
        }
    }
}

/// Query result row for transport records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TransportRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Vehicle model.
    pub model: Option<String>,
    /// Government registration plate.
    pub gov_number: Option<String>,
    /// Rented through a carsharing service.
    pub carsharing: bool,
    /// Part of the corporate fleet.
    pub corporate: bool,
    /// Fitted for auto-VC operation.
    pub auto_vc: bool,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<TransportRow> for Transport {
    fn from(row: TransportRow) -> Self {
        Self {
            id: TransportId::from_raw(row.id),
            name: row.name,
            model: row.model,
            gov_number: row.gov_number,
            carsharing: row.carsharing,
            corporate: row.corporate,
            auto_vc: row.auto_vc,
            has_blockers: row.has_blockers,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert model for transport records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = transports)]
pub struct NewTransportRow {
    /// Display name.
    pub name: String,
    /// Vehicle model.
    pub model: Option<String>,
    /// Government registration plate.
    pub gov_number: Option<String>,
    /// Rented through a carsharing service.
    pub carsharing: bool,
    /// Part of the corporate fleet.
    pub corporate: bool,
    /// Fitted for auto-VC operation.
    pub auto_vc: bool,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewTransportRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub fn from_new(new: NewTransport, now: DateTime<Utc>) -> Self {
        Self {
            name: new.name,
            model: new.model,
            gov_number: new.gov_number,
            carsharing: new.carsharing,
            corporate: new.corporate,
            auto_vc: new.auto_vc,
            has_blockers: new.has_blockers,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset for transport records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = transports)]
#[diesel(treat_none_as_null = true)]
pub struct TransportChangeset {
    /// Display name.
    pub name: String,
    /// Vehicle model.
    pub model: Option<String>,
    /// Government registration plate.
    pub gov_number: Option<String>,
    /// Rented through a carsharing service.
    pub carsharing: bool,
    /// Part of the corporate fleet.
    pub corporate: bool,
    /// Fitted for auto-VC operation.
    pub auto_vc: bool,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TransportChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub fn from_domain(transport: &Transport) -> Self {
        Self {
            name: transport.name.clone(),
            model: transport.model.clone(),
            gov_number: transport.gov_number.clone(),
            carsharing: transport.carsharing,
            corporate: transport.corporate,
            auto_vc: transport.auto_vc,
            has_blockers: transport.has_blockers,
            updated_at: transport.updated_at,
        }
    }
}

/// Query result row for robot records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = robots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RobotRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Fleet-facing business number.
    pub number: i64,
    /// Hardware series.
    pub series: i64,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<RobotRow> for Robot {
    fn from(row: RobotRow) -> Self {
        Self {
            id: RobotId::from_raw(row.id),
            number: row.number,
            series: row.series,
            has_blockers: row.has_blockers,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert model for robot records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = robots)]
pub struct NewRobotRow {
    /// Fleet-facing business number.
    pub number: i64,
    /// Hardware series.
    pub series: i64,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewRobotRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub fn from_new(new: NewRobot, now: DateTime<Utc>) -> Self {
        Self {
            number: new.number,
            series: new.series,
            has_blockers: new.has_blockers,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset for robot records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = robots)]
pub struct RobotChangeset {
    /// Fleet-facing business number.
    pub number: i64,
    /// Hardware series.
    pub series: i64,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RobotChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub const fn from_domain(robot: &Robot) -> Self {
        Self {
            number: robot.number,
            series: robot.series,
            has_blockers: robot.has_blockers,
            updated_at: robot.updated_at,
        }
    }
}

/// Query result row for crew records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CrewRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Crew name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Advisory member capacity.
    pub max_members: i32,
    /// Owning account placeholder.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<CrewRow> for Crew {
    fn from(row: CrewRow) -> Self {
        Self {
            id: CrewId::from_raw(row.id),
            name: row.name,
            description: row.description,
            max_members: row.max_members,
            owner_id: row.owner_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert model for crew records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crews)]
pub struct NewCrewRow {
    /// Crew name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Advisory member capacity.
    pub max_members: i32,
    /// Owning account placeholder.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NewCrewRow {
    /// Builds an insert row from the domain payload, stamping timestamps.
    #[must_use]
    pub fn from_new(new: NewCrew, now: DateTime<Utc>) -> Self {
        Self {
            name: new.name,
            description: new.description,
            max_members: new.max_members,
            owner_id: new.owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row changeset for crew records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crews)]
#[diesel(treat_none_as_null = true)]
pub struct CrewChangeset {
    /// Crew name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Advisory member capacity.
    pub max_members: i32,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl CrewChangeset {
    /// Captures the patched domain record as a full-row write.
    #[must_use]
    pub fn from_domain(crew: &Crew) -> Self {
        Self {
            name: crew.name.clone(),
            description: crew.description.clone(),
            max_members: crew.max_members,
            updated_at: crew.updated_at,
        }
    }
}
