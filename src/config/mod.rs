/// Database configuration and connection management
pub mod database;

/// Seed settings loading from config.toml
pub mod settings;
