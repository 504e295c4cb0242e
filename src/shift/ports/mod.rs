//! Port contracts for shift and task persistence.

mod repository;

pub use repository::{ShiftRepository, ShiftStoreError, ShiftStoreResult, TaskRepository};

// Pagination is shared with the directory context; the window shape is the
// same across the whole entity store.
pub use crate::directory::ports::Page;
