//! Vehicle records
//!
//! The record type held by the store plus the closed value sets used by
//! validation and by the fuel type / transmission filters.

use std::fmt;
use std::str::FromStr;

/// Year of the first automobile. No record may be older.
pub const FIRST_AUTOMOBILE_YEAR: i32 = 1887;

/// Identifier assigned by the store on insert
pub type VehicleId = u64;

/// A stored vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Assigned by the store; ignored on insert unless it collides with the next id
    pub id: VehicleId,

    pub attributes: VehicleAttributes,
}

impl Vehicle {
    /// A record that has not been stored yet (id 0)
    pub fn new(attributes: VehicleAttributes) -> Self {
        Self { id: 0, attributes }
    }
}

/// Every attribute of a vehicle except its id
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub year: i32,
    pub color: String,
    pub max_speed: i32,

    /// Kept as text so validation can report it in field order
    pub fuel_type: String,
    pub transmission: String,

    pub passengers: i32,
    pub height: f64,
    pub width: f64,
    pub weight: f64,
}

// =============================================================================
// Closed Sets
// =============================================================================

/// Accepted fuel types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Gasoline,
    Gas,
    Diesel,
    Biodiesel,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gasoline,
        FuelType::Gas,
        FuelType::Diesel,
        FuelType::Biodiesel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Gas => "gas",
            FuelType::Diesel => "diesel",
            FuelType::Biodiesel => "biodiesel",
        }
    }
}

impl FromStr for FuelType {
    type Err = ();

    /// Exact, lowercase match only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|ft| ft.as_str() == s).ok_or(())
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted transmissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    SemiAutomatic,
    Manual,
}

impl Transmission {
    pub const ALL: [Transmission; 3] = [
        Transmission::Automatic,
        Transmission::SemiAutomatic,
        Transmission::Manual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Automatic => "automatic",
            Transmission::SemiAutomatic => "semi-automatic",
            Transmission::Manual => "manual",
        }
    }
}

impl FromStr for Transmission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
