use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Load capacities a generated truck can be assigned, in metric tons.
pub const TRUCK_CAPACITIES: [u32; 3] = [10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TruckStatus {
    #[serde(rename = "On Route")]
    OnRoute,
    Idle,
    Maintenance,
}

/// A simulated vehicle, generated per request and never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: u32,
    pub driver: String,
    pub plate: String,
    pub status: TruckStatus,
    pub logo: String,
    pub capacity_tons: u32,
}
