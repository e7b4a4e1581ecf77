pub mod carrier;
pub mod search;
pub mod truck;

pub use carrier::{Carrier, CarrierTemplate};
pub use search::{SearchRequest, SearchResponse};
pub use truck::{Truck, TruckStatus, TRUCK_CAPACITIES};
