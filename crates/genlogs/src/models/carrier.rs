use super::truck::Truck;
use serde::{Deserialize, Serialize};

/// A carrier as listed in a route table, before its fleet is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierTemplate {
    pub name: &'static str,
    pub trucks_per_day: u32,
    pub logo: &'static str,
}

impl CarrierTemplate {
    pub const fn new(name: &'static str, trucks_per_day: u32, logo: &'static str) -> Self {
        Self {
            name,
            trucks_per_day,
            logo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub name: String,
    pub trucks_per_day: u32,
    pub logo: String,
    pub trucks: Vec<Truck>,
}
