//! Crew records and their create/patch payloads.

use super::CrewId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named group of employees.
///
/// `max_members` is advisory capacity; it is stored but not enforced
/// against the current membership count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    /// Store-assigned identifier.
    pub id: CrewId,
    /// Crew name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Advisory member capacity.
    pub max_members: i32,
    /// Owning account; a placeholder, no ownership checks are performed.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCrew {
    /// Crew name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Advisory member capacity.
    pub max_members: i32,
    /// Owning account placeholder.
    pub owner_id: i64,
}

impl NewCrew {
    /// Default advisory capacity when the caller does not supply one.
    pub const DEFAULT_MAX_MEMBERS: i32 = 10;
}

/// Merge-patch for a crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewPatch {
    /// New crew name.
    pub name: Option<String>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New advisory capacity.
    pub max_members: Option<i32>,
}

impl CrewPatch {
    /// Applies the patch in place, leaving absent fields unchanged.
    pub fn apply_to(self, crew: &mut Crew) {
        if let Some(name) = self.name {
            crew.name = name;
        }
        if let Some(description) = self.description {
            crew.description = description;
        }
        if let Some(max_members) = self.max_members {
            crew.max_members = max_members;
        }
    }
}
