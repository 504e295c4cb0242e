//! Robot records and their create/patch payloads.

use super::RobotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A delivery robot in the fleet.
///
/// The `number` is the fleet-facing business identifier and must be unique
/// across robots; the store enforces that on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Store-assigned identifier.
    pub id: RobotId,
    /// Fleet-facing business number, unique.
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

/// Payload for creating a robot record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRobot {
    /// Fleet-facing business number, unique.
    pub number: i64,
    /// Hardware series.
    pub series: i64,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
}

/// Merge-patch for a robot record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPatch {
    /// New business number.
    pub number: Option<i64>,
    /// New hardware series.
    pub series: Option<i64>,
    /// New blocker flag.
    pub has_blockers: Option<bool>,
}

impl RobotPatch {
    /// Applies the patch in place, leaving absent fields unchanged.
    pub fn apply_to(self, robot: &mut Robot) {
        if let Some(number) = self.number {
            robot.number = number;
        }
        if let Some(series) = self.series {
            robot.series = series;
        }
        if let Some(has_blockers) = self.has_blockers {
            robot.has_blockers = has_blockers;
        }
    }
}
