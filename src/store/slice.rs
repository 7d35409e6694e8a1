//! Vec-backed store
//!
//! Ordered collection plus `last_id`, both under one RwLock.

use parking_lot::RwLock;

use super::{StoreError, VehicleStore};
use crate::vehicle::{FuelType, Vehicle, VehicleId};

/// In-memory vehicle store
pub struct VehicleSlice {
    inner: RwLock<Inner>,
}

struct Inner {
    /// Records in insertion order
    vehicles: Vec<Vehicle>,

    /// Highest id ever assigned (or loaded). Never decremented by deletes.
    last_id: VehicleId,
}

impl Inner {
    /// Assign the next id to `vehicle` and append it.
    ///
    /// Only a caller-supplied id equal to the id about to be assigned is
    /// rejected; collisions with older ids are not checked.
    fn push(&mut self, mut vehicle: Vehicle) -> Result<Vehicle, StoreError> {
        let next_id = self.last_id + 1;
        if vehicle.id == next_id {
            return Err(StoreError::VehicleIdAlreadyExists);
        }

        vehicle.id = next_id;
        self.last_id = next_id;
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    fn find_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }
}

impl VehicleSlice {
    /// Create a store from already-valid records and the highest id in use
    pub fn new(vehicles: Vec<Vehicle>, last_id: VehicleId) -> Self {
        Self {
            inner: RwLock::new(Inner { vehicles, last_id }),
        }
    }

    /// Create an empty store whose first id will be 1
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.inner.read().vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().vehicles.is_empty()
    }

    /// Highest id assigned so far
    pub fn last_id(&self) -> VehicleId {
        self.inner.read().last_id
    }
}

impl Default for VehicleSlice {
    fn default() -> Self {
        Self::empty()
    }
}

impl VehicleStore for VehicleSlice {
    fn find_all(&self) -> Result<Vec<Vehicle>, StoreError> {
        let inner = self.inner.read();
        if inner.vehicles.is_empty() {
            return Err(StoreError::VehiclesNotFound);
        }
        Ok(inner.vehicles.clone())
    }

    fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, StoreError> {
        self.inner.write().push(vehicle)
    }

    fn insert_many(&self, vehicles: Vec<Vehicle>) -> Result<Vec<Vehicle>, StoreError> {
        let mut inner = self.inner.write();
        let mut inserted = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            inserted.push(inner.push(vehicle)?);
        }
        Ok(inserted)
    }

    fn update_max_speed_by_id(&self, id: VehicleId, max_speed: i32) -> Result<Vehicle, StoreError> {
        let mut inner = self.inner.write();
        let vehicle = inner.find_mut(id).ok_or(StoreError::VehicleNotFound)?;
        vehicle.attributes.max_speed = max_speed;
        Ok(vehicle.clone())
    }

    fn update_fuel_type_by_id(&self, id: VehicleId, fuel_type: FuelType) -> Result<Vehicle, StoreError> {
        let mut inner = self.inner.write();
        let vehicle = inner.find_mut(id).ok_or(StoreError::VehicleNotFound)?;
        vehicle.attributes.fuel_type = fuel_type.as_str().to_string();
        Ok(vehicle.clone())
    }

    fn delete(&self, id: VehicleId) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let index = inner
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or(StoreError::VehicleNotFound)?;

        // remove (not swap_remove) keeps the relative order of the rest
        inner.vehicles.remove(index);
        Ok(())
    }
}
