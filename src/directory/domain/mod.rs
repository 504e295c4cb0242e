//! Domain model for roster reference data.
//!
//! Employees, transports, robots, and crews are plain records managed by
//! administrative CRUD. Each entity carries a store-assigned integer id and
//! store-stamped timestamps; updates are expressed as explicit merge-patch
//! structs so that only the fields present in a request are mutated.

mod crew;
mod employee;
mod ids;
mod robot;
mod transport;

pub use crew::{Crew, CrewPatch, NewCrew};
pub use employee::{Employee, EmployeePatch, NewEmployee};
pub use ids::{CrewId, EmployeeId, RobotId, TransportId};
pub use robot::{NewRobot, Robot, RobotPatch};
pub use transport::{NewTransport, Transport, TransportPatch};
