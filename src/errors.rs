//! Unified error types and result handling
//!
//! Every fallible layer (persistence, configuration, the Discord shell) reports
//! through this one enum. The accounting engine itself is infallible.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is malformed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A decimal hour value that cannot be stored (negative or not finite)
    #[error("Invalid hours: {hours}")]
    InvalidHours {
        /// The rejected value
        hours: f64,
    },

    /// Hours/minutes input outside the accepted ranges
    #[error("Invalid time {hours}h {minutes}m: hours must be 0-23, minutes 0-59, and the total above zero")]
    InvalidTime {
        /// Whole hours entered
        hours: u32,
        /// Minutes entered
        minutes: u32,
    },

    /// Date string that is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// No entry with this id exists
    #[error("Entry {id} not found")]
    EntryNotFound {
        /// Missing entry id
        id: i64,
    },

    /// No hour type with this id exists
    #[error("Hour type '{id}' not found")]
    HourTypeNotFound {
        /// Missing hour type id
        id: String,
    },

    /// Settings rejected by validation
    #[error("Invalid settings: {message}")]
    InvalidSettings {
        /// What was wrong
        message: String,
    },

    /// Writing into a `String` buffer failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Missing or unreadable environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error bubbled up from the Discord framework
    #[error("Discord error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
