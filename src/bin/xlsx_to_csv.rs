//! Spreadsheet export utility.
//!
//! Reads every sheet of the BMS export workbook and writes one CSV file per
//! sheet into `./csv_tables/`, overwriting existing files of the same name.
//! The workbook path defaults to the exported file name and can be overridden
//! with `BMS_XLSX_PATH`.

use bms_integration::errors::{Error, Result};
use calamine::{Reader, open_workbook_auto};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_XLSX_PATH: &str = "BMS JSON Packets.xlsx";
const OUTPUT_DIR: &str = "./csv_tables";

/// Cleans a sheet name for use as a filename: spaces and path separators
/// become underscores, and the result is lowercased.
fn sanitize_sheet_name(sheet_name: &str) -> String {
    sheet_name.replace([' ', '/'], "_").to_lowercase()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let xlsx_path =
        std::env::var("BMS_XLSX_PATH").unwrap_or_else(|_| DEFAULT_XLSX_PATH.to_string());

    std::fs::create_dir_all(OUTPUT_DIR)?;

    let mut workbook = open_workbook_auto(&xlsx_path).map_err(|e| Error::Spreadsheet {
        message: format!("Failed to open workbook {xlsx_path}: {e}"),
    })?;

    for sheet_name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| Error::Spreadsheet {
                message: format!("Failed to read sheet {sheet_name}: {e}"),
            })?;

        let safe_name = sanitize_sheet_name(&sheet_name);
        let csv_path = Path::new(OUTPUT_DIR).join(format!("{safe_name}.csv"));

        let mut writer = csv::Writer::from_path(&csv_path)?;
        for row in range.rows() {
            writer.write_record(row.iter().map(std::string::ToString::to_string))?;
        }
        writer.flush()?;

        info!("Saved {}", csv_path.display());
    }

    info!("All sheets converted to CSV!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Battery Packs"), "battery_packs");
        assert_eq!(sanitize_sheet_name("Q1/Q2 Data"), "q1_q2_data");
        assert_eq!(sanitize_sheet_name("plain"), "plain");
    }
}
