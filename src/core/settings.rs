//! Settings persistence - the yearly goal and the ordered hour types.
//!
//! Settings are a singleton: the first read seeds the store from the
//! configured defaults, and every write replaces the whole record inside one
//! database transaction after validation.

use crate::{
    core::model::{HourType, MAX_CAPPED_TYPES, PRIMARY_SERVICE_TYPE_ID, Settings},
    entities::{self, hour_type, settings as settings_record},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

async fn load_settings<C>(db: &C) -> Result<Option<Settings>>
where
    C: ConnectionTrait,
{
    let Some(record) = entities::Settings::find().one(db).await? else {
        return Ok(None);
    };

    let hour_types = entities::HourType::find()
        .order_by_asc(hour_type::Column::Position)
        .all(db)
        .await?
        .into_iter()
        .map(HourType::from)
        .collect();

    let yearly_goal = u32::try_from(record.yearly_goal).map_err(|_| Error::InvalidSettings {
        message: format!("stored yearly goal {} is negative", record.yearly_goal),
    })?;

    Ok(Some(Settings {
        yearly_goal,
        hour_types,
    }))
}

async fn write_settings<C>(db: &C, settings: &Settings) -> Result<()>
where
    C: ConnectionTrait,
{
    let yearly_goal = i32::try_from(settings.yearly_goal).map_err(|_| Error::InvalidSettings {
        message: format!("yearly goal {} is too large", settings.yearly_goal),
    })?;
    let now = Utc::now().naive_utc();

    if let Some(existing) = entities::Settings::find().one(db).await? {
        let mut active: settings_record::ActiveModel = existing.into();
        active.yearly_goal = Set(yearly_goal);
        active.updated_at = Set(now);
        active.update(db).await?;
    } else {
        settings_record::ActiveModel {
            yearly_goal: Set(yearly_goal),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    entities::HourType::delete_many().exec(db).await?;
    for (position, hour_type) in settings.hour_types.iter().enumerate() {
        let position = i32::try_from(position).map_err(|_| Error::InvalidSettings {
            message: "too many hour types".to_string(),
        })?;
        hour_type::ActiveModel {
            id: Set(hour_type.id.clone()),
            name: Set(hour_type.name.trim().to_string()),
            has_limit: Set(hour_type.has_limit),
            position: Set(position),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

fn validated(settings: &Settings) -> Result<()> {
    settings
        .validate()
        .map_err(|message| Error::InvalidSettings { message })
}

/// Current settings, seeding `defaults` into an empty store first.
///
/// # Errors
/// Database failures, or [`Error::InvalidSettings`] if `defaults` are invalid.
pub async fn get_settings_or_seed(
    db: &DatabaseConnection,
    defaults: &Settings,
) -> Result<Settings> {
    if let Some(settings) = load_settings(db).await? {
        return Ok(settings);
    }

    validated(defaults)?;
    let txn = db.begin().await?;
    write_settings(&txn, defaults).await?;
    txn.commit().await?;
    info!(
        yearly_goal = defaults.yearly_goal,
        hour_types = defaults.hour_types.len(),
        "Seeded default settings"
    );
    Ok(defaults.clone())
}

/// Current settings, seeding the built-in defaults into an empty store first.
pub async fn get_settings(db: &DatabaseConnection) -> Result<Settings> {
    get_settings_or_seed(db, &Settings::default()).await
}

/// Replaces the stored settings.
///
/// # Errors
/// [`Error::InvalidSettings`] when the new settings break a structural rule.
#[instrument(skip(db, settings), fields(yearly_goal = settings.yearly_goal))]
pub async fn update_settings(db: &DatabaseConnection, settings: &Settings) -> Result<()> {
    validated(settings)?;
    let txn = db.begin().await?;
    write_settings(&txn, settings).await?;
    txn.commit().await?;
    info!("Settings updated");
    Ok(())
}

/// Changes only the yearly goal.
///
/// # Errors
/// [`Error::InvalidSettings`] for a zero goal.
pub async fn set_yearly_goal(db: &DatabaseConnection, yearly_goal: u32) -> Result<Settings> {
    let mut settings = get_settings(db).await?;
    settings.yearly_goal = yearly_goal;
    update_settings(db, &settings).await?;
    Ok(settings)
}

/// Adds a capped hour type with a generated id.
///
/// # Errors
/// [`Error::InvalidSettings`] when the name is blank or the capped-type limit is reached.
pub async fn add_hour_type(db: &DatabaseConnection, name: &str) -> Result<HourType> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidSettings {
            message: "hour type name cannot be empty".to_string(),
        });
    }

    let mut settings = get_settings(db).await?;
    if settings.capped_types().count() >= MAX_CAPPED_TYPES {
        return Err(Error::InvalidSettings {
            message: format!("at most {MAX_CAPPED_TYPES} additional hour types are allowed"),
        });
    }

    let mut millis = Utc::now().timestamp_millis();
    while settings.hour_type(&format!("type_{millis}")).is_some() {
        millis += 1;
    }
    let hour_type = HourType::capped(format!("type_{millis}"), name);

    settings.hour_types.push(hour_type.clone());
    update_settings(db, &settings).await?;
    Ok(hour_type)
}

/// Renames an hour type, including primary service.
///
/// # Errors
/// [`Error::HourTypeNotFound`] or [`Error::InvalidSettings`] for a blank name.
pub async fn rename_hour_type(db: &DatabaseConnection, id: &str, name: &str) -> Result<HourType> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidSettings {
            message: "hour type name cannot be empty".to_string(),
        });
    }

    let mut settings = get_settings(db).await?;
    let hour_type = settings
        .hour_types
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::HourTypeNotFound { id: id.to_string() })?;
    hour_type.name = name.to_string();
    let renamed = hour_type.clone();

    update_settings(db, &settings).await?;
    Ok(renamed)
}

/// Removes a capped hour type, returning it.
///
/// Entries recorded under the type are kept; they still count as capped
/// hours and display as `"Unknown type"`.
///
/// # Errors
/// [`Error::InvalidSettings`] for the primary service type,
/// [`Error::HourTypeNotFound`] for unknown ids.
#[instrument(skip(db))]
pub async fn remove_hour_type(db: &DatabaseConnection, id: &str) -> Result<HourType> {
    if id == PRIMARY_SERVICE_TYPE_ID {
        return Err(Error::InvalidSettings {
            message: "the primary service type cannot be removed".to_string(),
        });
    }

    let mut settings = get_settings(db).await?;
    let position = settings
        .hour_types
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| Error::HourTypeNotFound { id: id.to_string() })?;
    let removed = settings.hour_types.remove(position);

    update_settings(db, &settings).await?;
    info!(hour_type = id, "Removed hour type");
    Ok(removed)
}

/// Display name for a type id, `"Unknown type"` when it does not resolve.
pub async fn hour_type_name(db: &DatabaseConnection, id: &str) -> Result<String> {
    Ok(get_settings(db).await?.hour_type_name(id).to_string())
}
