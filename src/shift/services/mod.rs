//! Orchestration services for the scheduling core.
//!
//! [`SchedulingService`] carries the CRUD surface with boundary validation,
//! [`TaskEnricher`] joins display fields onto tasks, [`ShiftComposer`]
//! assembles a shift with its enriched tasks, and [`TemporalQueryService`]
//! answers the "on date", "in range", and "active now" questions.

mod composer;
mod enrichment;
mod scheduling;
mod temporal;

pub use composer::{ComposeError, ComposeResult, ShiftComposer};
pub use enrichment::TaskEnricher;
pub use scheduling::{SchedulingError, SchedulingResult, SchedulingService};
pub use temporal::TemporalQueryService;
