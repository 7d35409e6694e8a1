//! Vehicle payloads

use serde::{Deserialize, Serialize};

use crate::vehicle::{Vehicle, VehicleAttributes, VehicleId};

/// Fields a create request must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 12] = [
    "brand",
    "model",
    "registration",
    "year",
    "color",
    "max_speed",
    "fuel_type",
    "transmission",
    "passengers",
    "height",
    "width",
    "weight",
];

/// A stored vehicle on the wire (responses and the data file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleJson {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub max_speed: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub passengers: i32,
    pub height: f64,
    pub width: f64,
    pub weight: f64,
}

impl From<Vehicle> for VehicleJson {
    fn from(v: Vehicle) -> Self {
        let a = v.attributes;
        Self {
            id: v.id,
            brand: a.brand,
            model: a.model,
            registration: a.registration,
            year: a.year,
            color: a.color,
            max_speed: a.max_speed,
            fuel_type: a.fuel_type,
            transmission: a.transmission,
            passengers: a.passengers,
            height: a.height,
            width: a.width,
            weight: a.weight,
        }
    }
}

impl From<VehicleJson> for Vehicle {
    fn from(j: VehicleJson) -> Self {
        Vehicle {
            id: j.id,
            attributes: VehicleAttributes {
                brand: j.brand,
                model: j.model,
                registration: j.registration,
                year: j.year,
                color: j.color,
                max_speed: j.max_speed,
                fuel_type: j.fuel_type,
                transmission: j.transmission,
                passengers: j.passengers,
                height: j.height,
                width: j.width,
                weight: j.weight,
            },
        }
    }
}

/// Body of a create request. Any `id` sent by the client is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleBody {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub max_speed: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub passengers: i32,
    pub height: f64,
    pub width: f64,
    pub weight: f64,
}

impl From<VehicleBody> for Vehicle {
    fn from(b: VehicleBody) -> Self {
        Vehicle::new(VehicleAttributes {
            brand: b.brand,
            model: b.model,
            registration: b.registration,
            year: b.year,
            color: b.color,
            max_speed: b.max_speed,
            fuel_type: b.fuel_type,
            transmission: b.transmission,
            passengers: b.passengers,
            height: b.height,
            width: b.width,
            weight: b.weight,
        })
    }
}

/// Body of `PUT /vehicles/:id/update_speed`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMaxSpeedBody {
    /// Absent means 0, which validation rejects
    #[serde(default)]
    pub max_speed: i32,
}

/// Body of `PUT /vehicles/:id/update_fuel`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFuelTypeBody {
    #[serde(default)]
    pub fuel_type: String,
}
