//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{health_report, rental},
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test battery health report with sensible defaults.
///
/// # Defaults
/// * `report_date`: now
/// * all telemetry fields: unset
pub async fn create_test_report(
    db: &DatabaseConnection,
    battery_device_id: &str,
) -> Result<entities::battery_health_report::Model> {
    health_report::create_report(
        db,
        health_report::NewReport {
            battery_device_id: battery_device_id.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test battery health report at a fixed report date.
pub async fn create_custom_report(
    db: &DatabaseConnection,
    battery_device_id: &str,
    report_date: DateTime<Utc>,
) -> Result<entities::battery_health_report::Model> {
    health_report::create_report(
        db,
        health_report::NewReport {
            battery_device_id: battery_device_id.to_string(),
            report_date: Some(report_date),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test rental order with the given flag and end date.
///
/// # Defaults
/// * `battery_device_id`: `"BAT-TEST"` when the order is a rental, else unset
pub async fn create_rental(
    db: &DatabaseConnection,
    name: &str,
    is_battery_rental: bool,
    subscription_end_date: Option<DateTime<Utc>>,
) -> Result<entities::rental_order::Model> {
    rental::create_rental_order(
        db,
        rental::NewRentalOrder {
            name: name.to_string(),
            is_battery_rental,
            battery_device_id: is_battery_rental.then(|| "BAT-TEST".to_string()),
            subscription_end_date,
        },
    )
    .await
}
