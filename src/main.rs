//! Periodic-task entry point: one expiry scan per invocation.
//!
//! The scheduling cadence lives outside this binary (cron or similar); each
//! run opens the database, makes sure the schema and seed data exist, scans
//! for expired battery rental subscriptions, and exits.

use bms_integration::errors::Result;
use bms_integration::{config, core};
use chrono::Utc;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect to the database and ensure tables exist
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 4. Seed lookup data from config.toml when present
    let seed_config = config::seed::load_default_config()?;
    core::manufacturing::seed_lookup_data(&db, &seed_config)
        .await
        .inspect_err(|e| error!("Failed to seed lookup data: {e}"))?;

    // 5. Run the expiry scan once and exit
    let expired = core::rental::check_expired_subscriptions(&db, Utc::now()).await?;
    info!(expired = expired.len(), "Expiry scan complete.");

    Ok(())
}
