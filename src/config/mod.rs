/// Database configuration and connection management
pub mod database;

/// Lookup-data seeding from config.toml
pub mod seed;
