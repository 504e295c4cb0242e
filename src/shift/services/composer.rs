//! Shift composition: a shift joined with its enriched tasks.

use super::TaskEnricher;
use crate::directory::ports::DirectoryStoreError;
use crate::directory::services::ErrorKind;
use crate::shift::domain::{ComposedShift, Shift, ShiftId};
use crate::shift::ports::{ShiftRepository, ShiftStoreError, TaskRepository};
use std::sync::Arc;
use thiserror::Error;

/// Result type for shift composition.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors surfaced while composing shifts or running temporal queries.
#[derive(Debug, Clone, Error)]
pub enum ComposeError {
    /// No shift with the given id.
    #[error("shift not found: {0}")]
    ShiftNotFound(ShiftId),

    /// Shift or task store failure.
    #[error(transparent)]
    Store(#[from] ShiftStoreError),

    /// Reference data store failure during enrichment.
    #[error(transparent)]
    Directory(#[from] DirectoryStoreError),
}

impl ComposeError {
    /// Classifies the error for status-code mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ShiftNotFound(_) => ErrorKind::NotFound,
            Self::Store(_) | Self::Directory(_) => ErrorKind::Internal,
        }
    }
}

/// Assembles a shift together with all of its tasks, each enriched.
#[derive(Clone)]
pub struct ShiftComposer {
    shifts: Arc<dyn ShiftRepository>,
    tasks: Arc<dyn TaskRepository>,
    enricher: TaskEnricher,
}

impl ShiftComposer {
    /// Creates a composer over the shift and task stores.
    #[must_use]
    pub fn new(
        shifts: Arc<dyn ShiftRepository>,
        tasks: Arc<dyn TaskRepository>,
        enricher: TaskEnricher,
    ) -> Self {
        Self {
            shifts,
            tasks,
            enricher,
        }
    }

    /// Composes the shift with the given id.
    ///
    /// A shift without tasks composes to a valid record with an empty task
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::ShiftNotFound`] when the id is absent.
    pub async fn compose(&self, id: ShiftId) -> ComposeResult<ComposedShift> {
        let shift = self
            .shifts
            .find_by_id(id)
            .await?
            .ok_or(ComposeError::ShiftNotFound(id))?;
        self.compose_shift(shift).await
    }

    /// Composes an already-loaded shift record.
    ///
    /// # Errors
    ///
    /// Propagates store failures from the task listing and enrichment.
    pub async fn compose_shift(&self, shift: Shift) -> ComposeResult<ComposedShift> {
        let tasks = self.tasks.find_by_shift(shift.id).await?;
        let enriched = self.enricher.enrich_all(tasks).await?;
        Ok(ComposedShift::from_parts(shift, enriched))
    }
}
