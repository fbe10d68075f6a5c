//! QC workflow entity - Named quality-control checklist.
//!
//! Steps are unstructured text, one step per line; there is no modeled step
//! sequence and no enforcement that steps are executed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quality control workflow database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "qc_workflows")]
pub struct Model {
    /// Unique identifier for the workflow
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Workflow name (e.g. "Final Inspection")
    pub name: String,
    /// Free-text description of the workflow
    pub description: Option<String>,
    /// QC steps, one per line
    pub qc_steps: Option<String>,
}

/// Defines relationships between `QcWorkflow` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One workflow is referenced by many production orders
    #[sea_orm(has_many = "super::production_order::Entity")]
    ProductionOrders,
}

impl Related<super::production_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
