//! # FleetDB
//!
//! An in-memory vehicle catalog with:
//! - Field-level validation on every write
//! - Filtered reads and per-brand aggregates over full snapshots
//! - Monotonic id assignment that survives deletes
//! - JSON-over-HTTP front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                (axum, /vehicles routes)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │           (validation, filters, aggregates)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Loader    │ ───────▶ │    Store    │
//!   │ (JSON file) │  startup │  (RwLock)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod vehicle;
pub mod store;
pub mod validation;
pub mod loader;
pub mod network;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FleetError, Result};
pub use config::Config;
pub use engine::Engine;
pub use vehicle::{FuelType, Transmission, Vehicle, VehicleAttributes, VehicleId};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FleetDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
