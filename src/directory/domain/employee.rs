//! Employee records and their create/patch payloads.

use super::{CrewId, EmployeeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A field operator who can be assigned to shift tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Patronymic, when the operator has one on record.
    pub patronymic: Option<String>,
    /// Messaging handle.
    pub tg: Option<String>,
    /// Staff directory tag.
    pub staff: Option<String>,
    /// Body/group tag used for filtering.
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
    /// Crew membership, if assigned.
    pub crew: Option<CrewId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the display name: given name, family name, and the
    /// patronymic only when present, space-separated in that order.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.patronymic {
            Some(patronymic) => format!("{} {} {patronymic}", self.firstname, self.lastname),
            None => format!("{} {}", self.firstname, self.lastname),
        }
    }
}

/// Payload for creating an employee; ids and timestamps are store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Patronymic, optional.
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
    /// Crew membership, if assigned.
    pub crew: Option<CrewId>,
}

/// Merge-patch for an employee: only fields present in the payload are
/// applied, everything else is left untouched. Nullable fields use a
/// double option so "set to null" and "leave unchanged" stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    /// New given name.
    pub firstname: Option<String>,
    /// New family name.
    pub lastname: Option<String>,
    /// New patronymic; `Some(None)` clears it.
    pub patronymic: Option<Option<String>>,
    /// New messaging handle; `Some(None)` clears it.
    pub tg: Option<Option<String>>,
    /// New staff tag; `Some(None)` clears it.
    pub staff: Option<Option<String>>,
    /// New body tag; `Some(None)` clears it.
    pub body: Option<Option<String>>,
    /// New drive flag.
    pub drive: Option<bool>,
    /// New parking flag.
    pub parking: Option<bool>,
    /// New telemedicine flag.
    pub telemedicine: Option<bool>,
    /// New attorney flag.
    pub attorney: Option<bool>,
    /// New auto-VC access flag.
    pub auto_vc_access: Option<bool>,
    /// New crew membership; `Some(None)` removes the employee from a crew.
    pub crew: Option<Option<CrewId>>,
}

impl EmployeePatch {
    /// Returns the crew id the patch would assign, if it touches the field.
    #[must_use]
    pub fn assigned_crew(&self) -> Option<CrewId> {
        self.crew.as_ref().and_then(|crew| *crew)
    }

    /// Applies the patch in place, leaving absent fields unchanged.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(firstname) = self.firstname {
            employee.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            employee.lastname = lastname;
        }
        if let Some(patronymic) = self.patronymic {
            employee.patronymic = patronymic;
        }
        if let Some(tg) = self.tg {
            employee.tg = tg;
        }
        if let Some(staff) = self.staff {
            employee.staff = staff;
        }
        if let Some(body) = self.body {
            employee.body = body;
        }
        if let Some(drive) = self.drive {
            employee.drive = drive;
        }
        if let Some(parking) = self.parking {
            employee.parking = parking;
        }
        if let Some(telemedicine) = self.telemedicine {
            employee.telemedicine = telemedicine;
        }
        if let Some(attorney) = self.attorney {
            employee.attorney = attorney;
        }
        if let Some(auto_vc_access) = self.auto_vc_access {
            employee.auto_vc_access = auto_vc_access;
        }
        if let Some(crew) = self.crew {
            employee.crew = crew;
        }
    }
}
