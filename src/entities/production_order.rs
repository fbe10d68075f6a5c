//! Production order entity - A manufacturing order with optional links
//! to a production line and a QC workflow.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Production order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "production_orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Order reference (e.g. "MO0017")
    pub name: String,
    /// Production line this order is processed on, if assigned
    pub production_line_id: Option<i64>,
    /// QC workflow to follow for this order, if assigned
    pub qc_workflow_id: Option<i64>,
}

/// Defines relationships between `ProductionOrder` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each production order may belong to one production line
    #[sea_orm(
        belongs_to = "super::production_line::Entity",
        from = "Column::ProductionLineId",
        to = "super::production_line::Column::Id"
    )]
    ProductionLine,
    /// Each production order may follow one QC workflow
    #[sea_orm(
        belongs_to = "super::qc_workflow::Entity",
        from = "Column::QcWorkflowId",
        to = "super::qc_workflow::Column::Id"
    )]
    QcWorkflow,
}

impl Related<super::production_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionLine.def()
    }
}

impl Related<super::qc_workflow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QcWorkflow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
