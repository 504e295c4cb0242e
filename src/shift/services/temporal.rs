//! Temporal queries over shifts and tasks.
//!
//! Three question shapes: "planned on this calendar day" (composed and
//! enriched), "planned in this date range" (bare shifts), and "active at
//! this instant" (closed interval on the working window, defaulting to the
//! injected clock). Store failures fail the whole query, no partial
//! results; the detail is logged here and the caller sees the opaque error.

use super::{ComposeResult, ShiftComposer};
use crate::shift::domain::{ComposedShift, Shift, Task};
use crate::shift::ports::{ShiftRepository, TaskRepository};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::error;

/// Answers date and activity questions over the schedule.
#[derive(Clone)]
pub struct TemporalQueryService {
    shifts: Arc<dyn ShiftRepository>,
    tasks: Arc<dyn TaskRepository>,
    composer: ShiftComposer,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TemporalQueryService {
    /// Creates the query service using the system clock.
    #[must_use]
    pub fn new(
        shifts: Arc<dyn ShiftRepository>,
        tasks: Arc<dyn TaskRepository>,
        composer: ShiftComposer,
    ) -> Self {
        Self::with_clock(shifts, tasks, composer, Arc::new(DefaultClock))
    }

    /// Creates the query service with an injected clock, so "now" is
    /// deterministic under test.
    #[must_use]
    pub fn with_clock(
        shifts: Arc<dyn ShiftRepository>,
        tasks: Arc<dyn TaskRepository>,
        composer: ShiftComposer,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            shifts,
            tasks,
            composer,
            clock,
        }
    }

    /// Returns every shift planned on the calendar day, composed with its
    /// enriched tasks. A day with nothing planned yields an empty list.
    ///
    /// # Errors
    ///
    /// Fails as a whole on any store error; details are logged.
    pub async fn shifts_on_date(&self, day: NaiveDate) -> ComposeResult<Vec<ComposedShift>> {
        let (start, end) = day_window(day);
        let shifts = self
            .shifts
            .find_by_date_between(start, end)
            .await
            .inspect_err(|err| error!(%day, error = %err, "shift by-date query failed"))?;
        let mut composed = Vec::with_capacity(shifts.len());
        for shift in shifts {
            let shift_id = shift.id;
            composed.push(
                self.composer
                    .compose_shift(shift)
                    .await
                    .inspect_err(|err| {
                        error!(%shift_id, error = %err, "shift composition failed");
                    })?,
            );
        }
        Ok(composed)
    }

    /// Returns bare shifts whose `date` lies in `[start, end]`, both
    /// inclusive.
    ///
    /// # Errors
    ///
    /// Fails on store error; details are logged.
    pub async fn shifts_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ComposeResult<Vec<Shift>> {
        Ok(self
            .shifts
            .find_by_date_between(start, end)
            .await
            .inspect_err(|err| error!(%start, %end, error = %err, "shift range query failed"))?)
    }

    /// Returns shifts active at the reference instant, defaulting to the
    /// clock's now. The working window is closed on both ends.
    ///
    /// # Errors
    ///
    /// Fails on store error; details are logged.
    pub async fn active_shifts(
        &self,
        reference: Option<DateTime<Utc>>,
    ) -> ComposeResult<Vec<Shift>> {
        let instant = reference.unwrap_or_else(|| self.clock.utc());
        Ok(self
            .shifts
            .find_active_at(instant)
            .await
            .inspect_err(|err| error!(%instant, error = %err, "active shift query failed"))?)
    }

    /// Returns tasks fully contained in the window (`time_start >= start`
    /// and `time_end <= end`).
    ///
    /// # Errors
    ///
    /// Fails on store error; details are logged.
    pub async fn tasks_in_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ComposeResult<Vec<Task>> {
        Ok(self
            .tasks
            .find_in_window(start, end)
            .await
            .inspect_err(|err| error!(%start, %end, error = %err, "task window query failed"))?)
    }

    /// Returns tasks active at the reference instant, defaulting to the
    /// clock's now.
    ///
    /// # Errors
    ///
    /// Fails on store error; details are logged.
    pub async fn active_tasks(
        &self,
        reference: Option<DateTime<Utc>>,
    ) -> ComposeResult<Vec<Task>> {
        let instant = reference.unwrap_or_else(|| self.clock.utc());
        Ok(self
            .tasks
            .find_active_at(instant)
            .await
            .inspect_err(|err| error!(%instant, error = %err, "active task query failed"))?)
    }
}

/// Expands a calendar day into its inclusive UTC window, from midnight to
/// the last representable microsecond of the day.
fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::microseconds(1);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::day_window;
    use chrono::NaiveDate;

    #[test]
    fn day_window_spans_whole_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let (start, end) = day_window(day);
        assert_eq!(start.to_rfc3339(), "2025-03-10T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-03-10T23:59:59.999999+00:00");
    }
}
