//! In-memory directory repositories for tests and local tooling.
//!
//! Each store keeps its rows in a `BTreeMap` keyed by the raw id, which
//! gives id-ordered listings for free, and stamps timestamps through an
//! injected clock so tests can pin time.

mod crew;
mod employee;
mod robot;
mod transport;

pub use crew::InMemoryCrewRepository;
pub use employee::InMemoryEmployeeRepository;
pub use robot::InMemoryRobotRepository;
pub use transport::InMemoryTransportRepository;

use crate::directory::ports::DirectoryStoreError;

/// Maps a poisoned-lock failure onto the persistence error variant.
pub(crate) fn lock_poisoned(err: impl ToString) -> DirectoryStoreError {
    DirectoryStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Applies an offset/limit window to an id-ordered iterator.
pub(crate) fn paginate<T>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
    rows.skip(offset).take(limit).collect()
}
