//! Error types for FleetDB
//!
//! Engine-tier errors. Store-tier errors live in [`crate::store::StoreError`]
//! and are re-tagged into these on the way out of the engine.

use thiserror::Error;

use crate::store::StoreError;

/// Result type alias using FleetError
pub type Result<T> = std::result::Result<T, FleetError>;

/// Unified error type for FleetDB operations
#[derive(Debug, Error)]
pub enum FleetError {
    // -------------------------------------------------------------------------
    // Validation Errors (one per field, reported in field order)
    // -------------------------------------------------------------------------
    #[error("invalid vehicle brand")]
    InvalidBrand,

    #[error("invalid vehicle model")]
    InvalidModel,

    #[error("invalid vehicle registration")]
    InvalidRegistration,

    #[error("invalid vehicle year")]
    InvalidYear,

    #[error("invalid vehicle color")]
    InvalidColor,

    #[error("invalid vehicle max speed")]
    InvalidMaxSpeed,

    #[error("invalid vehicle fuel type")]
    InvalidFuelType,

    #[error("invalid vehicle transmission")]
    InvalidTransmission,

    #[error("invalid vehicle passengers")]
    InvalidPassengers,

    #[error("invalid vehicle height")]
    InvalidHeight,

    #[error("invalid vehicle width")]
    InvalidWidth,

    #[error("invalid vehicle weight")]
    InvalidWeight,

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("vehicles not found")]
    VehiclesNotFound,

    #[error("vehicle not found")]
    VehicleNotFound,

    #[error("vehicle id already exists")]
    VehicleIdAlreadyExists,

    // -------------------------------------------------------------------------
    // I/O and Serialization Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FleetError {
    /// True for the per-field validation family
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FleetError::InvalidBrand
                | FleetError::InvalidModel
                | FleetError::InvalidRegistration
                | FleetError::InvalidYear
                | FleetError::InvalidColor
                | FleetError::InvalidMaxSpeed
                | FleetError::InvalidFuelType
                | FleetError::InvalidTransmission
                | FleetError::InvalidPassengers
                | FleetError::InvalidHeight
                | FleetError::InvalidWidth
                | FleetError::InvalidWeight
        )
    }

    /// True for both "nothing matched" and "no such id"
    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::VehiclesNotFound | FleetError::VehicleNotFound)
    }
}

impl From<StoreError> for FleetError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::VehiclesNotFound => FleetError::VehiclesNotFound,
            StoreError::VehicleNotFound => FleetError::VehicleNotFound,
            StoreError::VehicleIdAlreadyExists => FleetError::VehicleIdAlreadyExists,
        }
    }
}
