//! Unified error types for the crate.
//!
//! All fallible operations return [`Result`], which wraps the single [`Error`]
//! enum. Database, I/O, and CSV failures convert via `#[from]`;
//! domain failures use struct variants carrying the offending value.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration (seed file, blank required fields).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Any error surfaced by the database layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem error from the utility binaries.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A battery health report id that does not exist.
    #[error("Battery health report {id} not found")]
    ReportNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// A rental order id that does not exist.
    #[error("Rental order {id} not found")]
    OrderNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// A production order id that does not exist.
    #[error("Production order {id} not found")]
    ProductionOrderNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// Failure reading the workbook in the spreadsheet export binary.
    #[error("Spreadsheet error: {message}")]
    Spreadsheet {
        /// Underlying reader error, stringified
        message: String,
    },

    /// CSV writer error from the spreadsheet export binary.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// External command failed or could not be spawned.
    #[error("Command execution error: {message}")]
    Command {
        /// Command line and exit status
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
