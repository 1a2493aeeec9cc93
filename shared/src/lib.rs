//! ==============================================================================
//! lib.rs - shared types for vehicle dashboard
//! ==============================================================================
//!
//! purpose:
//!     defines the vehicle domain model and the api wire shapes consumed by
//!     the dashboard. keeping them in a plain library crate means they build
//!     and test natively even though the ui itself only targets wasm.
//!
//! relationships:
//!     - used by: dashboard (all types for API requests/responses and the
//!       per-view state objects Draft and EditSession)
//!
//! design rationale:
//!     the ui components stay thin wiring over these types. everything with
//!     behavior worth asserting (wire field mapping, status enumeration,
//!     timestamp display, draft/session transitions) lives here under unit
//!     tests instead of inside wasm-only component code.
//!
//! ==============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==============================================================================
// vehicle status
// ==============================================================================

/// operational status of a vehicle
///
/// the backend stores the lowercase token; the ui only ever offers these
/// three values, so nothing out of the set can be sent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Inactive,
    Maintenance,
}

impl VehicleStatus {
    /// every status the selector offers, in display order
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Inactive,
        VehicleStatus::Maintenance,
    ];

    /// wire token, matches the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Inactive => "inactive",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    /// capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Inactive => "Inactive",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VehicleStatus::Active),
            "inactive" => Ok(VehicleStatus::Inactive),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            other => Err(format!("unknown vehicle status: {other}")),
        }
    }
}

// ==============================================================================
// vehicle record
// ==============================================================================

/// a vehicle as returned by the backend
///
/// `id` and `created_at` are server-assigned and immutable; `name` is set at
/// creation and never mutated by this client; only `status` changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    /// backend identifier (mongo-style `_id` on the wire)
    #[serde(rename = "_id")]
    pub id: String,
    /// display name
    pub name: String,
    /// current operational status
    pub status: VehicleStatus,
    /// creation timestamp, rfc 3339 on the wire
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// locale-style display form, e.g. "1/1/2024, 12:00:00 AM"
    pub fn formatted_created_at(&self) -> String {
        self.created_at
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

// ==============================================================================
// per-view client state
// ==============================================================================

/// unsaved creation-form input, local to the creation view
///
/// lifecycle: fresh on view mount, mutated by input events, reset on a
/// successful create, left intact when the create fails.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDraft {
    pub name: String,
    pub status: VehicleStatus,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: VehicleStatus::Active,
        }
    }
}

impl VehicleDraft {
    /// required-field check; the only client-side validation
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// inline-edit context for one row's status, local to the listing view
///
/// the listing view holds at most one of these (`Option<EditSession>`), so
/// starting an edit on another row replaces the previous session wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// id of the row being edited
    pub vehicle_id: String,
    /// value currently shown in the selector
    pub pending_status: VehicleStatus,
}

impl EditSession {
    /// open a session for a row, seeded with its current status
    pub fn begin(record: &VehicleRecord) -> Self {
        Self {
            vehicle_id: record.id.clone(),
            pending_status: record.status,
        }
    }

    /// whether this session belongs to the given row
    pub fn is_for(&self, vehicle_id: &str) -> bool {
        self.vehicle_id == vehicle_id
    }
}

// ==============================================================================
// api wire shapes
// ==============================================================================

/// body for POST /api/vehicles
#[derive(Debug, Clone, Serialize)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub status: VehicleStatus,
}

/// body for PUT /api/vehicles/{id}
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: VehicleStatus,
}

/// envelope returned by GET /api/vehicles
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleListResponse {
    pub data: VehicleListData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleListData {
    pub vehicles: Vec<VehicleRecord>,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn truck() -> VehicleRecord {
        VehicleRecord {
            id: "1".to_string(),
            name: "Truck".to_string(),
            status: VehicleStatus::Active,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_status_wire_tokens() {
        for status in VehicleStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<VehicleStatus>().unwrap(), status);
        }
        assert!("broken".parse::<VehicleStatus>().is_err());
    }

    #[test]
    fn test_status_display_token_vs_option_label() {
        // table cells render the lowercase wire token; the capitalized labels
        // exist only for the selector options
        assert_eq!(VehicleStatus::Active.as_str(), "active");
        assert_eq!(VehicleStatus::Active.label(), "Active");
        assert_eq!(VehicleStatus::Maintenance.label(), "Maintenance");
        for status in VehicleStatus::ALL {
            assert_eq!(status.as_str(), status.label().to_lowercase());
        }
    }

    #[test]
    fn test_list_envelope_decodes_wire_names() {
        let json = r#"{"data":{"vehicles":[
            {"_id":"1","name":"Truck","status":"active","createdAt":"2024-01-01T00:00:00Z"}
        ]}}"#;
        let response: VehicleListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.vehicles, vec![truck()]);
    }

    #[test]
    fn test_created_at_display_format() {
        assert_eq!(truck().formatted_created_at(), "1/1/2024, 12:00:00 AM");

        let afternoon = VehicleRecord {
            created_at: "2024-12-31T15:04:05Z".parse().unwrap(),
            ..truck()
        };
        assert_eq!(afternoon.formatted_created_at(), "12/31/2024, 3:04:05 PM");
    }

    #[test]
    fn test_create_request_body() {
        let body = CreateVehicleRequest {
            name: "Van".to_string(),
            status: VehicleStatus::Inactive,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Van","status":"inactive"}"#
        );
    }

    #[test]
    fn test_update_request_body() {
        let body = UpdateStatusRequest {
            status: VehicleStatus::Maintenance,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"maintenance"}"#
        );
    }

    #[test]
    fn test_draft_defaults_and_validation() {
        let mut draft = VehicleDraft::default();
        assert_eq!(draft.status, VehicleStatus::Active);
        assert!(!draft.is_valid());

        draft.name = "   ".to_string();
        assert!(!draft.is_valid());

        draft.name = "Truck".to_string();
        assert!(draft.is_valid());
    }

    #[test]
    fn test_edit_session_seeds_from_row() {
        let session = EditSession::begin(&truck());
        assert!(session.is_for("1"));
        assert!(!session.is_for("2"));
        assert_eq!(session.pending_status, VehicleStatus::Active);
    }

    #[test]
    fn test_single_session_replacement() {
        let other = VehicleRecord {
            id: "2".to_string(),
            status: VehicleStatus::Maintenance,
            ..truck()
        };

        // the listing view keeps at most one session; starting an edit on
        // another row overwrites the slot
        let mut slot = Some(EditSession::begin(&truck()));
        assert!(slot.as_ref().unwrap().is_for("1"));
        slot = Some(EditSession::begin(&other));

        let session = slot.unwrap();
        assert!(session.is_for("2"));
        assert_eq!(session.pending_status, VehicleStatus::Maintenance);
    }
}
