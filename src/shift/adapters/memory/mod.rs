//! In-memory shift and task repositories for tests and local tooling.

mod shift;
mod task;

pub use shift::InMemoryShiftRepository;
pub use task::InMemoryTaskRepository;

use crate::shift::ports::ShiftStoreError;

/// Maps a poisoned-lock failure onto the persistence error variant.
pub(crate) fn lock_poisoned(err: impl ToString) -> ShiftStoreError {
    ShiftStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Applies an offset/limit window to an id-ordered iterator.
pub(crate) fn paginate<T>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
    rows.skip(offset).take(limit).collect()
}
