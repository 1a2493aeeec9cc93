//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod create_vehicle;
mod header;
mod notice;
mod tabs;
mod vehicle_list;

pub use create_vehicle::CreateVehicleTab;
pub use header::Header;
pub use tabs::{Tab, TabNav};
pub use vehicle_list::VehicleListTab;
