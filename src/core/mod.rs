//! Core business logic - framework-agnostic operations over the entity layer.
//!
//! Each module covers one functional area and exposes async functions taking
//! a `DatabaseConnection` and returning `Result` types.

/// Battery health report operations and derived-name computation
pub mod health_report;
/// Production line / QC workflow lookups and production-order linkage
pub mod manufacturing;
/// Rental order operations, the expiry scan, and the rental-flag hook
pub mod rental;
