//! Shift records and their create/patch payloads.

use super::{ShiftDomainError, ShiftId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled time window during which tasks are performed.
///
/// `date` carries the calendar day the shift is planned for; `time_start`
/// and `time_end` bound the actual working window. `edited_at` tracks the
/// last roster edit and is bumped on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Store-assigned identifier.
    pub id: ShiftId,
    /// Calendar day the shift is planned for.
    pub date: DateTime<Utc>,
    /// Working window start.
    pub time_start: DateTime<Utc>,
    /// Working window end.
    pub time_end: DateTime<Utc>,
    /// Last roster edit.
    pub edited_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Shift {
    /// Returns `true` when the instant falls inside the working window.
    ///
    /// Both bounds are closed: a shift whose end equals the reference
    /// instant still counts as active.
    #[must_use]
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.time_start <= instant && instant <= self.time_end
    }
}

/// Payload for creating a shift; ids and timestamps are store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShift {
    /// Calendar day the shift is planned for.
    pub date: DateTime<Utc>,
    /// Working window start.
    pub time_start: DateTime<Utc>,
    /// Working window end.
    pub time_end: DateTime<Utc>,
}

impl NewShift {
    /// Validates the payload before any write.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftDomainError::InvertedTimeWindow`] when the window
    /// ends before it starts.
    pub fn validate(&self) -> Result<(), ShiftDomainError> {
        validate_window(self.time_start, self.time_end)
    }
}

/// Merge-patch for a shift: only fields present in the payload are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPatch {
    /// New calendar day.
    pub date: Option<DateTime<Utc>>,
    /// New window start.
    pub time_start: Option<DateTime<Utc>>,
    /// New window end.
    pub time_end: Option<DateTime<Utc>>,
}

impl ShiftPatch {
    /// Applies the patch in place, leaving absent fields unchanged.
    ///
    /// `edited_at` is bumped by the store on update, not here.
    pub fn apply_to(self, shift: &mut Shift) {
        if let Some(date) = self.date {
            shift.date = date;
        }
        if let Some(time_start) = self.time_start {
            shift.time_start = time_start;
        }
        if let Some(time_end) = self.time_end {
            shift.time_end = time_end;
        }
    }
}

/// Rejects windows that end before they start.
pub(crate) fn validate_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), ShiftDomainError> {
    if start > end {
        return Err(ShiftDomainError::InvertedTimeWindow { start, end });
    }
    Ok(())
}
