//! Battery health report entity - Point-in-time telemetry for a battery device.
//!
//! Each report captures a snapshot pulled from (or destined to be pulled from)
//! the external BMS database: state of health, cycle count, pack electricals,
//! and temperature. Duplicate reports for the same device and timestamp are
//! allowed; listings are ordered newest first.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Battery health report database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "battery_health_reports")]
pub struct Model {
    /// Unique identifier for the report
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identifier of the battery in the BMS (free text, e.g. "BAT-7")
    pub battery_device_id: String,
    /// When the report was generated
    pub report_date: DateTimeUtc,
    /// State of Health (SOH) of the battery, in percent; unvalidated
    pub state_of_health: Option<i32>,
    /// Number of charge/discharge cycles the battery has undergone
    pub cycle_count: Option<i32>,
    /// Total voltage of the battery pack, in millivolts
    pub pack_voltage: Option<i32>,
    /// Current flowing in or out of the battery pack, in milliamps
    pub pack_current: Option<i32>,
    /// Average temperature of the battery cells, in degrees Celsius
    pub temperature: Option<f64>,
    /// Whether this report was synced from the external BMS database
    pub is_synced: bool,
    /// Display name, derived from device id and report date and persisted
    pub name: String,
}

/// Battery health reports reference devices by free-text id only,
/// so there are no modeled relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
