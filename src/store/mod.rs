//! Store Module
//!
//! Exclusive owner of the vehicle collection and the id counter.
//!
//! ## Responsibilities
//! - Hold records in insertion order
//! - Assign ids from a counter that only moves forward
//! - Hand out snapshots, never references into the collection
//! - Locate records by id for targeted updates and deletes
//!
//! ## Data Structure Choice
//! A `Vec` behind a single `RwLock`:
//! - Every filter is a full scan anyway, so order matters more than lookup speed
//! - Scans share the read lock, mutations take the write lock
//! - Future: an id index for O(1) update/delete

mod slice;

pub use slice::VehicleSlice;

use thiserror::Error;

use crate::vehicle::{FuelType, Vehicle, VehicleId};

/// Store-tier errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store: vehicles not found")]
    VehiclesNotFound,

    #[error("store: vehicle not found")]
    VehicleNotFound,

    #[error("store: vehicle id already exists")]
    VehicleIdAlreadyExists,
}

/// Primitive operations the engine needs from a store
pub trait VehicleStore: Send + Sync {
    /// Copy of every record, in insertion order
    fn find_all(&self) -> Result<Vec<Vehicle>, StoreError>;

    /// Append one record under the next id
    fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, StoreError>;

    /// Append records one at a time, stopping at the first failure.
    /// Records appended before the failure stay in the store.
    fn insert_many(&self, vehicles: Vec<Vehicle>) -> Result<Vec<Vehicle>, StoreError>;

    fn update_max_speed_by_id(&self, id: VehicleId, max_speed: i32) -> Result<Vehicle, StoreError>;

    fn update_fuel_type_by_id(&self, id: VehicleId, fuel_type: FuelType) -> Result<Vehicle, StoreError>;

    fn delete(&self, id: VehicleId) -> Result<(), StoreError>;
}
