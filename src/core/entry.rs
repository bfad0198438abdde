//! Entry persistence - create, read, update and delete recorded service time.
//!
//! Several entries may share a date. Reads return engine [`ServiceEntry`]
//! values so callers can feed them straight into the calculators. Input
//! validation for hours/minutes and date strings lives here as well, so the
//! bot layer can reject bad input before anything reaches the engine.

use crate::{
    core::{model::ServiceEntry, time::hours_to_decimal},
    entities::{self, service_entry},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Largest whole-hour value accepted from input forms.
pub const MAX_INPUT_HOURS: u32 = 23;

/// Validates an hours+minutes pair and converts it to decimal hours.
///
/// # Errors
/// [`Error::InvalidTime`] when hours exceed 23, minutes exceed 59, or both are zero.
pub fn parse_time_input(hours: u32, minutes: u32) -> Result<f64> {
    if hours > MAX_INPUT_HOURS || minutes > 59 || (hours == 0 && minutes == 0) {
        return Err(Error::InvalidTime { hours, minutes });
    }
    Ok(hours_to_decimal(hours, minutes))
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
/// [`Error::InvalidDate`] when the string is not a valid calendar date.
pub fn parse_date_input(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(Error::InvalidHours { hours });
    }
    Ok(())
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

/// Every stored entry, newest date first.
pub async fn list_all_entries(db: &DatabaseConnection) -> Result<Vec<ServiceEntry>> {
    let models = entities::ServiceEntry::find()
        .order_by_desc(service_entry::Column::Date)
        .order_by_desc(service_entry::Column::Timestamp)
        .all(db)
        .await?;
    Ok(models.into_iter().map(ServiceEntry::from).collect())
}

/// The most recently dated entries, up to `limit`.
pub async fn list_recent_entries(db: &DatabaseConnection, limit: u64) -> Result<Vec<ServiceEntry>> {
    let models = entities::ServiceEntry::find()
        .order_by_desc(service_entry::Column::Date)
        .order_by_desc(service_entry::Column::Timestamp)
        .limit(limit)
        .all(db)
        .await?;
    Ok(models.into_iter().map(ServiceEntry::from).collect())
}

/// All entries recorded on one date, oldest first.
pub async fn get_entries_by_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Vec<ServiceEntry>> {
    let models = entities::ServiceEntry::find()
        .filter(service_entry::Column::Date.eq(date))
        .order_by_asc(service_entry::Column::Timestamp)
        .all(db)
        .await?;
    Ok(models.into_iter().map(ServiceEntry::from).collect())
}

/// Entries whose date lies in `[start, end]`, ordered by date.
pub async fn get_entries_in_range(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<ServiceEntry>> {
    let models = entities::ServiceEntry::find()
        .filter(service_entry::Column::Date.between(start, end))
        .order_by_asc(service_entry::Column::Date)
        .all(db)
        .await?;
    Ok(models.into_iter().map(ServiceEntry::from).collect())
}

/// Looks up one entry by id.
pub async fn get_entry_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<ServiceEntry>> {
    Ok(entities::ServiceEntry::find_by_id(id)
        .one(db)
        .await?
        .map(ServiceEntry::from))
}

/// Inserts an unsaved entry or replaces a stored one, returning the stored value.
///
/// An entry without an id is always inserted as a new row, even if other
/// entries exist for the same date. An entry with an id overwrites that row.
///
/// # Errors
/// [`Error::InvalidHours`] for negative or non-finite hours and
/// [`Error::EntryNotFound`] when the id does not exist.
#[instrument(skip(db, entry), fields(date = %entry.date, hours = entry.hours))]
pub async fn upsert_entry(db: &DatabaseConnection, entry: ServiceEntry) -> Result<ServiceEntry> {
    validate_hours(entry.hours)?;
    let notes = normalize_notes(entry.notes);

    let model = if let Some(id) = entry.id {
        let existing = entities::ServiceEntry::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::EntryNotFound { id })?;

        let mut active: service_entry::ActiveModel = existing.into();
        active.date = Set(entry.date);
        active.hours = Set(entry.hours);
        active.hour_type = Set(entry.hour_type);
        active.notes = Set(notes);
        active.timestamp = Set(entry.timestamp);
        let updated = active.update(db).await?;
        debug!(id, "Updated service entry");
        updated
    } else {
        let inserted = service_entry::ActiveModel {
            date: Set(entry.date),
            hours: Set(entry.hours),
            hour_type: Set(entry.hour_type),
            notes: Set(notes),
            timestamp: Set(entry.timestamp),
            ..Default::default()
        }
        .insert(db)
        .await?;
        debug!(id = inserted.id, "Inserted service entry");
        inserted
    };

    Ok(model.into())
}

/// Records new time for a date.
///
/// # Errors
/// See [`upsert_entry`].
pub async fn create_entry(
    db: &DatabaseConnection,
    date: NaiveDate,
    hours: f64,
    hour_type: String,
    notes: Option<String>,
) -> Result<ServiceEntry> {
    let entry = ServiceEntry {
        id: None,
        date,
        hours,
        hour_type,
        notes,
        timestamp: Utc::now(),
    };
    upsert_entry(db, entry).await
}

/// Deletes one entry.
///
/// # Errors
/// [`Error::EntryNotFound`] when nothing was deleted.
#[instrument(skip(db))]
pub async fn delete_entry(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = entities::ServiceEntry::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::EntryNotFound { id });
    }
    debug!(id, "Deleted service entry");
    Ok(())
}

/// Removes every entry, returning how many were deleted. Settings are kept.
#[instrument(skip(db))]
pub async fn clear_all_entries(db: &DatabaseConnection) -> Result<u64> {
    let result = entities::ServiceEntry::delete_many().exec(db).await?;
    info!(deleted = result.rows_affected, "Cleared all service entries");
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_parse_time_input() {
        assert_eq!(parse_time_input(2, 30).unwrap(), 2.5);
        assert_eq!(parse_time_input(0, 45).unwrap(), 0.75);
        assert!(matches!(
            parse_time_input(0, 0),
            Err(Error::InvalidTime { .. })
        ));
        assert!(parse_time_input(24, 0).is_err());
        assert!(parse_time_input(1, 60).is_err());
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input(" 2025-02-28 ").unwrap(), date(2025, 2, 28));
        assert!(matches!(
            parse_date_input("2025-02-30"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(parse_date_input("yesterday").is_err());
    }

    #[tokio::test]
    async fn test_multiple_entries_per_date() -> Result<()> {
        let db = setup_test_db().await?;
        let day = date(2025, 3, 4);

        create_test_entry(&db, day, 2.0, "service").await?;
        create_test_entry(&db, day, 1.5, "service").await?;
        create_test_entry(&db, date(2025, 3, 5), 1.0, "service").await?;

        let same_day = get_entries_by_date(&db, day).await?;
        assert_eq!(same_day.len(), 2);
        assert!(same_day.iter().all(|e| e.date == day && e.id.is_some()));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_all_entries_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_entry(&db, date(2025, 1, 1), 1.0, "service").await?;
        create_test_entry(&db, date(2025, 3, 1), 1.0, "service").await?;
        create_test_entry(&db, date(2025, 2, 1), 1.0, "service").await?;

        let entries = list_all_entries(&db).await?;
        let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 3, 1), date(2025, 2, 1), date(2025, 1, 1)]
        );

        let recent = list_recent_entries(&db, 2).await?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date(2025, 3, 1));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_entries_in_range_is_inclusive() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_entry(&db, date(2024, 8, 31), 1.0, "service").await?;
        create_test_entry(&db, date(2024, 9, 1), 2.0, "service").await?;
        create_test_entry(&db, date(2025, 8, 31), 3.0, "service").await?;
        create_test_entry(&db, date(2025, 9, 1), 4.0, "service").await?;

        let entries = get_entries_in_range(&db, date(2024, 9, 1), date(2025, 8, 31)).await?;
        let hours: Vec<f64> = entries.iter().map(|e| e.hours).collect();
        assert_eq!(hours, vec![2.0, 3.0]);
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_entry() -> Result<()> {
        let db = setup_test_db().await?;
        let mut entry = create_test_entry(&db, date(2025, 4, 1), 1.0, "service").await?;

        entry.hours = 3.25;
        entry.hour_type = "ldc".to_string();
        entry.notes = Some("  school prep  ".to_string());
        let updated = upsert_entry(&db, entry.clone()).await?;

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.hours, 3.25);
        assert_eq!(updated.hour_type, "ldc");
        assert_eq!(updated.notes.as_deref(), Some("school prep"));
        assert_eq!(list_all_entries(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_unknown_id_fails() -> Result<()> {
        let db = setup_test_db().await?;
        let mut entry = ServiceEntry::new(date(2025, 4, 1), 1.0, "service");
        entry.id = Some(999);

        let result = upsert_entry(&db, entry).await;
        assert!(matches!(result, Err(Error::EntryNotFound { id: 999 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_rejects_negative_hours() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = ServiceEntry::new(date(2025, 4, 1), -1.0, "service");
        assert!(matches!(
            upsert_entry(&db, entry).await,
            Err(Error::InvalidHours { .. })
        ));

        let entry = ServiceEntry::new(date(2025, 4, 1), f64::NAN, "service");
        assert!(upsert_entry(&db, entry).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_notes_are_not_stored() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = create_entry(
            &db,
            date(2025, 4, 2),
            1.0,
            "service".to_string(),
            Some("   ".to_string()),
        )
        .await?;
        assert!(entry.notes.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_entry_with_notes() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = ServiceEntry::new(date(2025, 4, 3), 2.0, "ldc").with_notes(" Kingdom Hall ");

        let stored = upsert_entry(&db, entry).await?;
        let fetched = get_entry_by_id(&db, stored.id.unwrap()).await?.unwrap();
        assert_eq!(fetched.notes.as_deref(), Some("Kingdom Hall"));
        assert_eq!(fetched.hour_type, "ldc");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_entry() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = create_test_entry(&db, date(2025, 4, 1), 1.0, "service").await?;
        let id = entry.id.unwrap();

        delete_entry(&db, id).await?;
        assert!(get_entry_by_id(&db, id).await?.is_none());
        assert!(matches!(
            delete_entry(&db, id).await,
            Err(Error::EntryNotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_all_entries() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_entry(&db, date(2025, 4, 1), 1.0, "service").await?;
        create_test_entry(&db, date(2025, 4, 2), 1.0, "ldc").await?;

        assert_eq!(clear_all_entries(&db).await?, 2);
        assert!(list_all_entries(&db).await?.is_empty());
        Ok(())
    }
}
