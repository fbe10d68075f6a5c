//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    BatteryHealthReport, ProductionLine, ProductionOrder, QcWorkflow, RentalOrder,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/bms_integration.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// Lookup tables (`production_lines`, `qc_workflows`) are created before
/// `production_orders`, which carries foreign keys to both.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let report_table = schema.create_table_from_entity(BatteryHealthReport);
    let rental_table = schema.create_table_from_entity(RentalOrder);
    let line_table = schema.create_table_from_entity(ProductionLine);
    let workflow_table = schema.create_table_from_entity(QcWorkflow);
    let production_table = schema.create_table_from_entity(ProductionOrder);

    db.execute(builder.build(&report_table)).await?;
    db.execute(builder.build(&rental_table)).await?;
    db.execute(builder.build(&line_table)).await?;
    db.execute(builder.build(&workflow_table)).await?;
    db.execute(builder.build(&production_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        BatteryHealthReportModel, ProductionLineModel, ProductionOrderModel, QcWorkflowModel,
        RentalOrderModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<BatteryHealthReportModel> =
            BatteryHealthReport::find().limit(1).all(&db).await?;
        let _: Vec<RentalOrderModel> = RentalOrder::find().limit(1).all(&db).await?;
        let _: Vec<ProductionLineModel> = ProductionLine::find().limit(1).all(&db).await?;
        let _: Vec<QcWorkflowModel> = QcWorkflow::find().limit(1).all(&db).await?;
        let _: Vec<ProductionOrderModel> = ProductionOrder::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[test]
    fn test_default_database_url() {
        // Only meaningful when DATABASE_URL is unset in the test environment
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(get_database_url(), "sqlite://data/bms_integration.sqlite");
        }
    }
}
