//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and creating entries with
//! sensible defaults.

use crate::{
    core::{
        entry,
        model::{HourType, ServiceEntry, Settings},
    },
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date; panics on invalid input.
#[allow(clippy::unwrap_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Records a test entry without notes.
pub async fn create_test_entry(
    db: &DatabaseConnection,
    date: NaiveDate,
    hours: f64,
    hour_type: &str,
) -> Result<ServiceEntry> {
    entry::create_entry(db, date, hours, hour_type.to_string(), None).await
}

/// Settings with primary service plus one capped `"ldc"` type.
pub fn settings_with_ldc() -> Settings {
    Settings {
        yearly_goal: 600,
        hour_types: vec![HourType::primary_service(), HourType::capped("ldc", "LDC")],
    }
}
