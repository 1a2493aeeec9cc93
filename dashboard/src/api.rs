//! ==============================================================================
//! api.rs - API client for the vehicle backend
//! ==============================================================================

use gloo_net::http::Request;
use shared::{
    CreateVehicleRequest, UpdateStatusRequest, VehicleDraft, VehicleListResponse, VehicleRecord,
    VehicleStatus,
};

/// Base path for the vehicle resource
pub const VEHICLES_BASE: &str = "/api/vehicles";

/// Fetch every vehicle record
pub async fn list_vehicles() -> Result<Vec<VehicleRecord>, String> {
    let response = Request::get(VEHICLES_BASE)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json::<VehicleListResponse>()
        .await
        .map_err(|e| e.to_string())
        .map(|envelope| envelope.data.vehicles)
}

/// Create a vehicle from the draft; the response body is ignored
pub async fn create_vehicle(draft: &VehicleDraft) -> Result<(), String> {
    let body = CreateVehicleRequest {
        name: draft.name.clone(),
        status: draft.status,
    };

    let response = Request::post(VEHICLES_BASE)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&body).unwrap())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    Ok(())
}

/// Change one vehicle's status; the response body is ignored
pub async fn update_vehicle_status(id: &str, status: VehicleStatus) -> Result<(), String> {
    let body = UpdateStatusRequest { status };

    let response = Request::put(&format!("{}/{}", VEHICLES_BASE, id))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&body).unwrap())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    Ok(())
}
