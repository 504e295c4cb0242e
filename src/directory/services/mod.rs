//! Orchestration services for roster reference data.

mod directory;

pub use directory::{DirectoryError, DirectoryResult, DirectoryService, ErrorKind};
