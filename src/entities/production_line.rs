//! Production line entity - Flat lookup table for manufacturing lines.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Production line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "production_lines")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Line name (e.g. "Assembly Line A")
    pub name: String,
    /// Physical location of the line
    pub location: Option<String>,
    /// Throughput capacity in units per hour
    pub capacity: Option<f64>,
}

/// Defines relationships between `ProductionLine` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One production line is referenced by many production orders
    #[sea_orm(has_many = "super::production_order::Entity")]
    ProductionOrders,
}

impl Related<super::production_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
