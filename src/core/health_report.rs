//! Battery health report business logic.
//!
//! Provides functions for creating, updating, and listing battery health
//! reports, plus the derived display-name computation. Telemetry fields are
//! stored as reported by the BMS with no range validation; only the device id
//! is required. All functions are async and return Result types for error
//! handling.

use crate::{
    entities::{BatteryHealthReport, battery_health_report},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fixed display name used when the device id or report date is absent.
pub const UNNAMED_REPORT: &str = "New Battery Health Report";

/// Input for creating a battery health report.
///
/// Only `battery_device_id` is required; `report_date` defaults to the time
/// of creation and all telemetry fields default to unset.
#[derive(Debug, Clone, Default)]
pub struct NewReport {
    /// Identifier of the battery in the BMS
    pub battery_device_id: String,
    /// When the report was generated; defaults to now
    pub report_date: Option<DateTime<Utc>>,
    /// State of Health, in percent
    pub state_of_health: Option<i32>,
    /// Charge/discharge cycle count
    pub cycle_count: Option<i32>,
    /// Pack voltage in millivolts
    pub pack_voltage: Option<i32>,
    /// Pack current in milliamps
    pub pack_current: Option<i32>,
    /// Average cell temperature in degrees Celsius
    pub temperature: Option<f64>,
}

/// Computes the display name for a report from its source fields.
///
/// When the trimmed device id is non-empty and a date is present, the name is
/// `"Report for {device_id} on {date}"` with the date portion only
/// (`YYYY-MM-DD`). Otherwise the fixed [`UNNAMED_REPORT`] placeholder is used.
#[must_use]
pub fn report_name(battery_device_id: &str, report_date: Option<DateTime<Utc>>) -> String {
    match (battery_device_id.trim(), report_date) {
        ("", _) | (_, None) => UNNAMED_REPORT.to_string(),
        (device_id, Some(date)) => {
            format!("Report for {device_id} on {}", date.format("%Y-%m-%d"))
        }
    }
}

/// Creates a new battery health report, validating that the device id is
/// non-empty and computing the persisted display name.
///
/// The report date defaults to the current time when not supplied. Telemetry
/// values are stored as given; duplicate reports for the same device and
/// timestamp are permitted.
pub async fn create_report(
    db: &DatabaseConnection,
    new_report: NewReport,
) -> Result<battery_health_report::Model> {
    let device_id = new_report.battery_device_id.trim().to_string();
    if device_id.is_empty() {
        return Err(Error::Config {
            message: "Battery device id cannot be empty".to_string(),
        });
    }

    let report_date = new_report.report_date.unwrap_or_else(Utc::now);
    let name = report_name(&device_id, Some(report_date));

    let report = battery_health_report::ActiveModel {
        battery_device_id: Set(device_id),
        report_date: Set(report_date),
        state_of_health: Set(new_report.state_of_health),
        cycle_count: Set(new_report.cycle_count),
        pack_voltage: Set(new_report.pack_voltage),
        pack_current: Set(new_report.pack_current),
        temperature: Set(new_report.temperature),
        is_synced: Set(false),
        name: Set(name),
        ..Default::default()
    };

    let result = report.insert(db).await?;
    Ok(result)
}

/// Finds a report by its unique ID.
pub async fn get_report_by_id(
    db: &DatabaseConnection,
    report_id: i64,
) -> Result<Option<battery_health_report::Model>> {
    BatteryHealthReport::find_by_id(report_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Updates a report's device id and/or report date, recomputing and
/// persisting the display name.
///
/// `None` leaves the corresponding field unchanged; a new device id must be
/// non-empty after trimming, as at creation. The name is recomputed from the
/// resulting values on every call since these are the only two fields it
/// derives from.
pub async fn update_report_source(
    db: &DatabaseConnection,
    report_id: i64,
    battery_device_id: Option<String>,
    report_date: Option<DateTime<Utc>>,
) -> Result<battery_health_report::Model> {
    if let Some(device_id) = &battery_device_id {
        if device_id.trim().is_empty() {
            return Err(Error::Config {
                message: "Battery device id cannot be empty".to_string(),
            });
        }
    }

    let report = get_report_by_id(db, report_id)
        .await?
        .ok_or(Error::ReportNotFound { id: report_id })?;

    let device_id = battery_device_id
        .map_or_else(|| report.battery_device_id.clone(), |id| id.trim().to_string());
    let date = report_date.unwrap_or(report.report_date);
    let name = report_name(&device_id, Some(date));

    let mut active: battery_health_report::ActiveModel = report.into();
    active.battery_device_id = Set(device_id);
    active.report_date = Set(date);
    active.name = Set(name);

    active.update(db).await.map_err(Into::into)
}

/// Marks a report as synced from the external BMS database.
pub async fn mark_synced(
    db: &DatabaseConnection,
    report_id: i64,
) -> Result<battery_health_report::Model> {
    let report = get_report_by_id(db, report_id)
        .await?
        .ok_or(Error::ReportNotFound { id: report_id })?;

    let mut active: battery_health_report::ActiveModel = report.into();
    active.is_synced = Set(true);

    active.update(db).await.map_err(Into::into)
}

/// Retrieves all battery health reports, newest first.
pub async fn list_reports(db: &DatabaseConnection) -> Result<Vec<battery_health_report::Model>> {
    BatteryHealthReport::find()
        .order_by_desc(battery_health_report::Column::ReportDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all reports for a specific battery device, newest first.
pub async fn list_reports_for_device(
    db: &DatabaseConnection,
    battery_device_id: &str,
) -> Result<Vec<battery_health_report::Model>> {
    BatteryHealthReport::find()
        .filter(battery_health_report::Column::BatteryDeviceId.eq(battery_device_id))
        .order_by_desc(battery_health_report::Column::ReportDate)
        .all(db)
        .await
        .map_err(Into::into)
}
