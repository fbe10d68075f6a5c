//! Lookup-data seeding configuration from config.toml
//!
//! This module provides functionality to load initial production lines and
//! QC workflows from a TOML configuration file. The entries defined in
//! config.toml are used to seed the database on first run or when entries
//! are missing; seeding itself lives in [`crate::core::manufacturing`].

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Production lines to seed
    #[serde(default)]
    pub production_lines: Vec<ProductionLineConfig>,
    /// QC workflows to seed
    #[serde(default)]
    pub qc_workflows: Vec<QcWorkflowConfig>,
}

/// Configuration for a single production line
#[derive(Debug, Deserialize, Clone)]
pub struct ProductionLineConfig {
    /// Name of the line
    pub name: String,
    /// Physical location
    pub location: Option<String>,
    /// Capacity in units per hour
    pub capacity: Option<f64>,
}

/// Configuration for a single QC workflow
#[derive(Debug, Deserialize, Clone)]
pub struct QcWorkflowConfig {
    /// Name of the workflow
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// QC steps, one per line
    pub qc_steps: Option<String>,
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from the default location (./config.toml).
///
/// A missing file is not an error: the seed file is optional, so this
/// returns an empty configuration when ./config.toml does not exist.
pub fn load_default_config() -> Result<SeedConfig> {
    if !Path::new("config.toml").exists() {
        return Ok(SeedConfig::default());
    }
    load_config("config.toml")
}
