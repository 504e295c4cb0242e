//! Identifier newtypes for roster reference entities.
//!
//! Ids are opaque `i64` handles assigned by the entity store on create;
//! the domain never fabricates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

/// Unique identifier for a transport asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportId(i64);

/// Unique identifier for a robot record.
///
/// Distinct from the robot's business number: the id is a store handle,
/// the number is the fleet-facing identifier painted on the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(i64);

/// Unique identifier for a crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrewId(i64);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw store-assigned identifier.
            #[must_use]
            pub const fn from_raw(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id!(EmployeeId);
impl_id!(TransportId);
impl_id!(RobotId);
impl_id!(CrewId);
