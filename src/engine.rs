//! Engine Module
//!
//! Validation and query engine layered over the store.
//!
//! ## Responsibilities
//! - Validate every write before it reaches the store
//! - Answer filtered reads and aggregates by scanning a snapshot
//! - Re-tag store errors into engine errors
//!
//! Every read takes a fresh snapshot via `find_all`; the engine never keeps
//! records of its own.

use crate::config::Config;
use crate::error::{FleetError, Result};
use crate::loader::VehicleLoader;
use crate::store::{VehicleSlice, VehicleStore};
use crate::validation::{self, require_text};
use crate::vehicle::{Vehicle, VehicleAttributes, VehicleId};

/// The validation and query engine
///
/// ## Concurrency Model
///
/// The engine itself is stateless; all shared state sits in the store,
/// which serializes mutations behind its own lock. Share it as
/// `Arc<Engine>`.
pub struct Engine {
    store: Box<dyn VehicleStore>,
}

impl Engine {
    /// Wrap an existing store
    pub fn new(store: impl VehicleStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Engine over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(VehicleSlice::empty())
    }

    /// Load the configured data file and build the store from it
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let (vehicles, result) = VehicleLoader::load(&config.data_file)?;
        tracing::info!(
            "Loaded {} vehicles from {} (last_id={})",
            result.vehicles_loaded,
            config.data_file.display(),
            result.last_id
        );

        Ok(Self::new(VehicleSlice::new(vehicles, result.last_id)))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every stored vehicle
    pub fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.store.find_all()?)
    }

    /// Exact match on color and year
    pub fn find_by_color_and_year(&self, color: &str, year: i32) -> Result<Vec<Vehicle>> {
        require_text(color, FleetError::InvalidColor)?;
        validation::validate_year(year)?;

        self.scan("color_and_year", |a| a.color == color && a.year == year)
    }

    /// Exact brand, year strictly between `start_year` and `end_year`
    pub fn find_by_brand_between_years(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Vehicle>> {
        require_text(brand, FleetError::InvalidBrand)?;
        validation::validate_year(start_year)?;
        if end_year < start_year {
            return Err(FleetError::InvalidYear);
        }

        self.scan("brand_between_years", |a| {
            a.brand == brand && a.year > start_year && a.year < end_year
        })
    }

    pub fn find_by_fuel_type(&self, fuel_type: &str) -> Result<Vec<Vehicle>> {
        let fuel_type = validation::parse_fuel_type(fuel_type)?;
        self.scan("fuel_type", |a| a.fuel_type == fuel_type.as_str())
    }

    pub fn find_by_transmission(&self, transmission: &str) -> Result<Vec<Vehicle>> {
        let transmission = validation::parse_transmission(transmission)?;
        self.scan("transmission", |a| a.transmission == transmission.as_str())
    }

    /// Height and width both strictly inside their bounds
    pub fn find_by_dimensions(
        &self,
        min_height: f64,
        max_height: f64,
        min_width: f64,
        max_width: f64,
    ) -> Result<Vec<Vehicle>> {
        validation::validate_range(min_height, max_height, FleetError::InvalidHeight)?;
        validation::validate_range(min_width, max_width, FleetError::InvalidWidth)?;

        self.scan("dimensions", |a| {
            a.height > min_height
                && a.height < max_height
                && a.width > min_width
                && a.width < max_width
        })
    }

    /// Weight strictly inside the bounds
    pub fn find_by_weight(&self, min_weight: f64, max_weight: f64) -> Result<Vec<Vehicle>> {
        validation::validate_range(min_weight, max_weight, FleetError::InvalidWeight)?;
        self.scan("weight", |a| a.weight > min_weight && a.weight < max_weight)
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Mean max speed across one brand
    pub fn average_speed_by_brand(&self, brand: &str) -> Result<f64> {
        self.average_by_brand(brand, |a| a.max_speed)
    }

    /// Mean passenger capacity across one brand
    pub fn average_capacity_by_brand(&self, brand: &str) -> Result<f64> {
        self.average_by_brand(brand, |a| a.passengers)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Validate and store one vehicle
    pub fn insert(&self, vehicle: Vehicle) -> Result<Vehicle> {
        validation::validate_attributes(&vehicle.attributes)?;

        let stored = self.store.insert(vehicle)?;
        tracing::debug!("Inserted vehicle id={}", stored.id);
        Ok(stored)
    }

    /// Validate the whole batch, then store it.
    ///
    /// Nothing is stored if any record is invalid. A store failure partway
    /// leaves the records before it in place.
    pub fn insert_many(&self, vehicles: Vec<Vehicle>) -> Result<Vec<Vehicle>> {
        for vehicle in &vehicles {
            validation::validate_attributes(&vehicle.attributes)?;
        }

        let stored = self.store.insert_many(vehicles)?;
        tracing::debug!("Inserted batch of {} vehicles", stored.len());
        Ok(stored)
    }

    pub fn update_max_speed(&self, id: VehicleId, max_speed: i32) -> Result<Vehicle> {
        validation::validate_max_speed(max_speed)?;

        let updated = self.store.update_max_speed_by_id(id, max_speed)?;
        tracing::debug!("Updated max speed of vehicle id={} to {}", id, max_speed);
        Ok(updated)
    }

    pub fn update_fuel_type(&self, id: VehicleId, fuel_type: &str) -> Result<Vehicle> {
        let fuel_type = validation::parse_fuel_type(fuel_type)?;

        let updated = self.store.update_fuel_type_by_id(id, fuel_type)?;
        tracing::debug!("Updated fuel type of vehicle id={} to {}", id, fuel_type);
        Ok(updated)
    }

    pub fn delete(&self, id: VehicleId) -> Result<()> {
        self.store.delete(id)?;
        tracing::debug!("Deleted vehicle id={}", id);
        Ok(())
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Snapshot, filter, and treat an empty result as `VehiclesNotFound`
    fn scan<F>(&self, filter: &str, predicate: F) -> Result<Vec<Vehicle>>
    where
        F: Fn(&VehicleAttributes) -> bool,
    {
        let matched: Vec<Vehicle> = self
            .store
            .find_all()?
            .into_iter()
            .filter(|v| predicate(&v.attributes))
            .collect();

        tracing::debug!("Filter {} matched {} vehicles", filter, matched.len());

        if matched.is_empty() {
            return Err(FleetError::VehiclesNotFound);
        }
        Ok(matched)
    }

    fn average_by_brand<F>(&self, brand: &str, field: F) -> Result<f64>
    where
        F: Fn(&VehicleAttributes) -> i32,
    {
        require_text(brand, FleetError::InvalidBrand)?;

        let (sum, count) = self
            .store
            .find_all()?
            .iter()
            .filter(|v| v.attributes.brand == brand)
            .fold((0i64, 0usize), |(sum, count), v| {
                (sum + i64::from(field(&v.attributes)), count + 1)
            });

        if count == 0 {
            return Err(FleetError::VehiclesNotFound);
        }
        Ok(sum as f64 / count as f64)
    }
}
