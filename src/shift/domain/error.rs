//! Error types for shift and task validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while validating shift and task payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShiftDomainError {
    /// A route task was submitted without its GeoJSON payload.
    #[error("geojson payload is required for route tasks")]
    RouteTaskMissingGeojson,

    /// The ticket list was empty.
    #[error("tickets must not be empty")]
    EmptyTickets,

    /// The time window ends before it starts.
    #[error("time window ends before it starts: {start} > {end}")]
    InvertedTimeWindow {
        /// Window start.
        start: DateTime<Utc>,
        /// Window end.
        end: DateTime<Utc>,
    },
}

/// Error returned while parsing task kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task kind: {0}")]
pub struct ParseTaskKindError(pub String);
