//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod battery_health_report;
pub mod production_line;
pub mod production_order;
pub mod qc_workflow;
pub mod rental_order;

// Re-export specific types to avoid conflicts
pub use battery_health_report::{
    Column as BatteryHealthReportColumn, Entity as BatteryHealthReport,
    Model as BatteryHealthReportModel,
};
pub use production_line::{
    Column as ProductionLineColumn, Entity as ProductionLine, Model as ProductionLineModel,
};
pub use production_order::{
    Column as ProductionOrderColumn, Entity as ProductionOrder, Model as ProductionOrderModel,
};
pub use qc_workflow::{Column as QcWorkflowColumn, Entity as QcWorkflow, Model as QcWorkflowModel};
pub use rental_order::{
    Column as RentalOrderColumn, Entity as RentalOrder, Model as RentalOrderModel,
};
