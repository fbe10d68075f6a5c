//! Schema loader utility.
//!
//! Runs the BMS schema SQL file against the PostgreSQL service of the running
//! docker-compose stack (the `db` service, container `hostinger-export-db-1`
//! in the exported project) by shelling out to `psql` inside the container.
//! The SQL file path defaults to the exported schema and can be overridden
//! with `BMS_SCHEMA_SQL`. Make sure docker-compose is up before running.

use bms_integration::errors::{Error, Result};
use std::process::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SQL_FILE: &str = "../backend/bms_schema.sql";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sql_file =
        std::env::var("BMS_SCHEMA_SQL").unwrap_or_else(|_| DEFAULT_SQL_FILE.to_string());

    info!("Running: docker-compose exec db psql -U postgres -d bms -f {sql_file}");

    let status = Command::new("docker-compose")
        .args(["exec", "db", "psql", "-U", "postgres", "-d", "bms", "-f"])
        .arg(&sql_file)
        .status()?;

    if !status.success() {
        return Err(Error::Command {
            message: format!("docker-compose exec exited with status {status}"),
        });
    }

    Ok(())
}
