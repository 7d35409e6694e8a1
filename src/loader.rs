//! Initial catalog loader
//!
//! Reads the JSON data file once at startup. The records are trusted as
//! already valid; only the highest id is derived so the store's counter
//! resumes without collisions.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::protocol::VehicleJson;
use crate::vehicle::{Vehicle, VehicleId};

/// Loads vehicles from a JSON array file
pub struct VehicleLoader;

/// Result of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadResult {
    /// Number of records read
    pub vehicles_loaded: usize,

    /// Highest id present in the file (0 when empty)
    pub last_id: VehicleId,
}

impl VehicleLoader {
    /// Load every vehicle in file order
    pub fn load(path: &Path) -> Result<(Vec<Vehicle>, LoadResult)> {
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<VehicleJson> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Load from an in-memory JSON string
    pub fn load_str(json: &str) -> Result<(Vec<Vehicle>, LoadResult)> {
        let records: Vec<VehicleJson> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<VehicleJson>) -> (Vec<Vehicle>, LoadResult) {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let vehicles: Vec<Vehicle> = records.into_iter().map(Vehicle::from).collect();

        let result = LoadResult {
            vehicles_loaded: vehicles.len(),
            last_id,
        };
        (vehicles, result)
    }
}
