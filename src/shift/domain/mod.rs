//! Domain model for shifts and tasks.

mod enriched;
mod error;
mod ids;
mod shift;
mod task;

pub use enriched::{ComposedShift, EnrichedTask};
pub use error::{ParseTaskKindError, ShiftDomainError};
pub use ids::{ShiftId, TaskId};
pub use shift::{NewShift, Shift, ShiftPatch};
pub use task::{NewTask, Task, TaskKind, TaskPatch};
