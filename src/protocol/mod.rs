//! Protocol Module
//!
//! JSON wire shapes shared by the HTTP handlers, the CLI client and the
//! data file loader.
//!
//! ## Vehicle Format
//! ```text
//! {
//!   "id": 1, "brand": "Toyota", "model": "Corolla", "registration": "ABC-123",
//!   "year": 2017, "color": "red", "max_speed": 180, "fuel_type": "gasoline",
//!   "transmission": "manual", "passengers": 5,
//!   "height": 1.45, "width": 1.78, "weight": 1300.0
//! }
//! ```
//!
//! ### Envelopes
//! - success with payload: `{"message": "...", "data": ...}`
//! - success, message only: `{"message": "..."}`
//! - failure: `{"error": "..."}`

mod vehicle;
mod response;

pub use vehicle::{UpdateFuelTypeBody, UpdateMaxSpeedBody, VehicleBody, VehicleJson, REQUIRED_FIELDS};
pub use response::{DataResponse, ErrorResponse, MessageResponse};
