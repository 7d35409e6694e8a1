//! Configuration for FleetDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FleetError, Result};

/// Main configuration for a FleetDB server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Data Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the initial catalog (array of vehicles).
    /// Read once at startup; never written back.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("vehicles.json"),
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(FleetError::Config("data file path is empty".to_string()));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(FleetError::Config("listen address is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
