//! Entry Discord commands - logging, listing, editing and deleting time.
//!
//! Input validation happens in `core::entry`; validation errors surface to the
//! user through the framework error handler.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            entry,
            model::{PRIMARY_SERVICE_TYPE_ID, ServiceEntry, Settings},
            settings,
            time::{decimal_to_hours, format_time},
        },
        errors::{Error, Result},
    };
    use chrono::Local;
    use std::fmt::Write;

    const DEFAULT_LIST_LIMIT: u64 = 10;

    fn resolve_type_id(settings: &Settings, input: Option<&str>) -> Result<String> {
        match input {
            None => Ok(PRIMARY_SERVICE_TYPE_ID.to_string()),
            Some(query) => settings
                .find_hour_type(query)
                .map(|t| t.id.clone())
                .ok_or_else(|| Error::HourTypeNotFound {
                    id: query.to_string(),
                }),
        }
    }

    fn format_entry(entry: &ServiceEntry, settings: &Settings) -> String {
        let mut line = format!(
            "`#{}` {} · **{}** · {}",
            entry.id.unwrap_or_default(),
            entry.date.format("%Y-%m-%d"),
            format_time(entry.hours),
            settings.hour_type_name(entry.type_id())
        );
        if let Some(notes) = &entry.notes {
            line.push_str(&format!(" · _{notes}_"));
        }
        line
    }

    /// Records service time for a date (today by default).
    #[poise::command(slash_command, prefix_command)]
    pub async fn log(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Whole hours (0-23)"] hours: u32,
        #[description = "Minutes (0-59)"] minutes: u32,
        #[description = "Hour type (default: Service)"]
        #[autocomplete = "autocomplete::autocomplete_hour_type"]
        hour_type: Option<String>,
        #[description = "Date as YYYY-MM-DD (default: today)"] date: Option<String>,
        #[description = "Optional notes"] notes: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let decimal = entry::parse_time_input(hours, minutes)?;
        let date = match date.as_deref() {
            Some(input) => entry::parse_date_input(input)?,
            None => Local::now().date_naive(),
        };
        let settings = settings::get_settings(db).await?;
        let type_id = resolve_type_id(&settings, hour_type.as_deref())?;

        let created = entry::create_entry(db, date, decimal, type_id, notes).await?;

        ctx.say(format!(
            "✅ Logged {}",
            format_entry(&created, &settings)
        ))
        .await?;
        Ok(())
    }

    /// Lists recent entries, or every entry recorded on one date.
    #[poise::command(slash_command, prefix_command)]
    pub async fn entries(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only entries on this date (YYYY-MM-DD)"] date: Option<String>,
        #[description = "How many recent entries to show (default: 10)"]
        #[min = 1]
        #[max = 50]
        limit: Option<u64>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let settings = settings::get_settings(db).await?;

        let (title, list) = match date.as_deref() {
            Some(input) => {
                let date = entry::parse_date_input(input)?;
                (
                    format!("📅 **Entries on {}**", date.format("%Y-%m-%d")),
                    entry::get_entries_by_date(db, date).await?,
                )
            }
            None => (
                "🗂️ **Recent Entries**".to_string(),
                entry::list_recent_entries(db, limit.unwrap_or(DEFAULT_LIST_LIMIT)).await?,
            ),
        };

        if list.is_empty() {
            ctx.say("📂 No entries found. Record time with `/log`.").await?;
            return Ok(());
        }

        let mut response = format!("{title}\n\n");
        for e in &list {
            writeln!(&mut response, "{}", format_entry(e, &settings))?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Changes an existing entry. Omitted fields keep their current value.
    #[poise::command(slash_command, prefix_command)]
    pub async fn edit_entry(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Entry id (shown by /entries)"] id: i64,
        #[description = "New whole hours (0-23)"] hours: Option<u32>,
        #[description = "New minutes (0-59)"] minutes: Option<u32>,
        #[description = "New hour type"]
        #[autocomplete = "autocomplete::autocomplete_hour_type"]
        hour_type: Option<String>,
        #[description = "New date (YYYY-MM-DD)"] date: Option<String>,
        #[description = "New notes (empty text clears them)"] notes: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let mut existing = entry::get_entry_by_id(db, id)
            .await?
            .ok_or(Error::EntryNotFound { id })?;
        let settings = settings::get_settings(db).await?;

        if hours.is_some() || minutes.is_some() {
            let current = decimal_to_hours(existing.hours);
            existing.hours = entry::parse_time_input(
                hours.unwrap_or(current.hours),
                minutes.unwrap_or(current.minutes),
            )?;
        }
        if let Some(input) = date.as_deref() {
            existing.date = entry::parse_date_input(input)?;
        }
        if hour_type.is_some() {
            existing.hour_type = resolve_type_id(&settings, hour_type.as_deref())?;
        }
        if let Some(notes) = notes {
            existing.notes = Some(notes);
        }

        let updated = entry::upsert_entry(db, existing).await?;
        ctx.say(format!("✏️ Updated {}", format_entry(&updated, &settings)))
            .await?;
        Ok(())
    }

    /// Deletes one entry.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_entry(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Entry id (shown by /entries)"] id: i64,
    ) -> Result<()> {
        entry::delete_entry(&ctx.data().database, id).await?;
        ctx.say(format!("🗑️ Deleted entry `#{id}`.")).await?;
        Ok(())
    }

    /// Deletes every entry. Goal and hour types are kept.
    #[poise::command(slash_command, prefix_command)]
    pub async fn clear_entries(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Set to true to confirm deleting all entries"] confirm: bool,
    ) -> Result<()> {
        if !confirm {
            ctx.say("ℹ️ Nothing deleted. Run `/clear_entries confirm:true` to delete every entry.")
                .await?;
            return Ok(());
        }

        let deleted = entry::clear_all_entries(&ctx.data().database).await?;
        ctx.say(format!(
            "🧹 Deleted {deleted} entr{}.",
            if deleted == 1 { "y" } else { "ies" }
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
