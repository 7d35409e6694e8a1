//! Field-level validation
//!
//! Rules are checked in a fixed order and the first violation wins:
//! brand, model, registration, year, color, max speed, fuel type,
//! transmission, passengers, height, width, weight.

use crate::error::{FleetError, Result};
use crate::vehicle::{FuelType, Transmission, VehicleAttributes, FIRST_AUTOMOBILE_YEAR};

pub const MIN_MAX_SPEED: i32 = 1;
pub const MAX_MAX_SPEED: i32 = 999;
pub const MIN_PASSENGERS: i32 = 1;
pub const MAX_PASSENGERS: i32 = 6;

/// Lower bound shared by height, width and weight
pub const MIN_MEASURE: f64 = 1.0;

/// Check every attribute, stopping at the first violation
pub fn validate_attributes(attrs: &VehicleAttributes) -> Result<()> {
    require_text(&attrs.brand, FleetError::InvalidBrand)?;
    require_text(&attrs.model, FleetError::InvalidModel)?;
    require_text(&attrs.registration, FleetError::InvalidRegistration)?;
    validate_year(attrs.year)?;
    require_text(&attrs.color, FleetError::InvalidColor)?;
    validate_max_speed(attrs.max_speed)?;
    parse_fuel_type(&attrs.fuel_type)?;
    parse_transmission(&attrs.transmission)?;

    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&attrs.passengers) {
        return Err(FleetError::InvalidPassengers);
    }

    require_measure(attrs.height, FleetError::InvalidHeight)?;
    require_measure(attrs.width, FleetError::InvalidWidth)?;
    require_measure(attrs.weight, FleetError::InvalidWeight)?;

    Ok(())
}

pub fn validate_year(year: i32) -> Result<()> {
    if year < FIRST_AUTOMOBILE_YEAR {
        return Err(FleetError::InvalidYear);
    }
    Ok(())
}

pub fn validate_max_speed(max_speed: i32) -> Result<()> {
    if !(MIN_MAX_SPEED..=MAX_MAX_SPEED).contains(&max_speed) {
        return Err(FleetError::InvalidMaxSpeed);
    }
    Ok(())
}

pub fn parse_fuel_type(value: &str) -> Result<FuelType> {
    value.parse().map_err(|_| FleetError::InvalidFuelType)
}

pub fn parse_transmission(value: &str) -> Result<Transmission> {
    value.parse().map_err(|_| FleetError::InvalidTransmission)
}

/// `min >= 1` and `max >= min`, reported as `err`
pub fn validate_range(min: f64, max: f64, err: FleetError) -> Result<()> {
    // negated comparisons so NaN bounds are rejected too
    if !(min >= MIN_MEASURE) || !(max >= min) {
        return Err(err);
    }
    Ok(())
}

pub(crate) fn require_text(value: &str, err: FleetError) -> Result<()> {
    if value.is_empty() {
        return Err(err);
    }
    Ok(())
}

fn require_measure(value: f64, err: FleetError) -> Result<()> {
    if !(value >= MIN_MEASURE) {
        return Err(err);
    }
    Ok(())
}
