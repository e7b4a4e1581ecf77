//! Simulated truck fleets.
//!
//! Every function takes the random source as an argument, so callers decide between a
//! thread-local generator and a seeded one.

use crate::models::{Carrier, CarrierTemplate, Truck, TruckStatus, TRUCK_CAPACITIES};
use rand::seq::IteratorRandom;
use rand::Rng;
use strum::IntoEnumIterator;

pub const PLATE_PREFIX: &str = "ABC-";

pub fn generate_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", PLATE_PREFIX, rng.gen_range(1000..=9999))
}

pub fn generate_truck<R: Rng + ?Sized>(id: u32, logo: &str, rng: &mut R) -> Truck {
    let plate = generate_plate(rng);
    // EnumIter reports an exact length, so this is a single uniform draw
    let status = TruckStatus::iter().choose(rng).unwrap_or(TruckStatus::Idle);
    let capacity_tons = TRUCK_CAPACITIES[rng.gen_range(0..TRUCK_CAPACITIES.len())];

    Truck {
        id,
        driver: format!("Driver {}", id),
        plate,
        status,
        logo: logo.to_string(),
        capacity_tons,
    }
}

/// Trucks numbered `1..=count`, all carrying the given logo.
pub fn generate_trucks<R: Rng + ?Sized>(count: u32, logo: &str, rng: &mut R) -> Vec<Truck> {
    (1..=count).map(|id| generate_truck(id, logo, rng)).collect()
}

impl CarrierTemplate {
    pub fn with_fleet<R: Rng + ?Sized>(&self, rng: &mut R) -> Carrier {
        Carrier {
            name: self.name.to_string(),
            trucks_per_day: self.trucks_per_day,
            logo: self.logo.to_string(),
            trucks: generate_trucks(self.trucks_per_day, self.logo, rng),
        }
    }
}
