//! Transport assets and their create/patch payloads.

use super::TransportId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle that can be allocated to a shift task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    /// Store-assigned identifier.
    pub id: TransportId,
    /// Display name.
    pub name: String,
    /// Vehicle model.
    pub model: Option<String>,
    /// Government registration plate.
    pub gov_number: Option<String>,
    /// Rented through a carsharing service.
    pub carsharing: bool,
    /// Part of the corporate fleet.
    pub corporate: bool,
    /// Fitted for auto-VC operation.
    pub auto_vc: bool,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a transport asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransport {
    /// Display name.
    pub name: String,
    /// Vehicle model.
    pub model: Option<String>,
    /// Government registration plate.
    pub gov_number: Option<String>,
    /// Rented through a carsharing service.
    pub carsharing: bool,
    /// Part of the corporate fleet.
    pub corporate: bool,
    /// Fitted for auto-VC operation.
    pub auto_vc: bool,
    /// Currently blocked from dispatch.
    pub has_blockers: bool,
}

/// Merge-patch for a transport asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportPatch {
    /// New display name.
    pub name: Option<String>,
    /// New model; `Some(None)` clears it.
    pub model: Option<Option<String>>,
    /// New registration plate; `Some(None)` clears it.
    pub gov_number: Option<Option<String>>,
    /// New carsharing flag.
    pub carsharing: Option<bool>,
    /// New corporate flag.
    pub corporate: Option<bool>,
    /// New auto-VC flag.
    pub auto_vc: Option<bool>,
    /// New blocker flag.
    pub has_blockers: Option<bool>,
}

impl TransportPatch {
    /// Applies the patch in place, leaving absent fields unchanged.
    pub fn apply_to(self, transport: &mut Transport) {
        if let Some(name) = self.name {
            transport.name = name;
        }
        if let Some(model) = self.model {
            transport.model = model;
        }
        if let Some(gov_number) = self.gov_number {
            transport.gov_number = gov_number;
        }
        if let Some(carsharing) = self.carsharing {
            transport.carsharing = carsharing;
        }
        if let Some(corporate) = self.corporate {
            transport.corporate = corporate;
        }
        if let Some(auto_vc) = self.auto_vc {
            transport.auto_vc = auto_vc;
        }
        if let Some(has_blockers) = self.has_blockers {
            transport.has_blockers = has_blockers;
        }
    }
}
