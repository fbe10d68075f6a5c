//! Rental order entity - A sales order extended with battery-rental fields.
//!
//! The rental flag, rented device id, and subscription end date drive the
//! periodic expiry scan. The device id is free text with no enforced
//! correspondence to any battery health report.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rental order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rental_orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Order reference (e.g. "SO0042")
    pub name: String,
    /// Whether this order is a battery rental
    pub is_battery_rental: bool,
    /// Identifier of the rented battery in the BMS, if known
    pub battery_device_id: Option<String>,
    /// When the rental subscription expires, if one was agreed
    pub subscription_end_date: Option<DateTimeUtc>,
    /// Free-text note; overwritten whenever the rental flag is toggled
    pub note: Option<String>,
}

/// Rental orders stand alone; the battery reference is free text.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
