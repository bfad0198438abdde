//! Settings Discord commands - yearly goal and hour types.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            model::{HourType, MAX_CAPPED_TYPES, UNKNOWN_TYPE_NAME},
            monthly::MONTHLY_CAP_HOURS,
            settings,
        },
        errors::{Error, Result},
    };
    use std::fmt::Write;

    async fn find_type(db: &sea_orm::DatabaseConnection, query: &str) -> Result<HourType> {
        settings::get_settings(db)
            .await?
            .find_hour_type(query)
            .cloned()
            .ok_or_else(|| Error::HourTypeNotFound {
                id: query.to_string(),
            })
    }

    /// Shows the yearly goal, or sets it when hours are given.
    #[poise::command(slash_command, prefix_command)]
    pub async fn goal(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "New yearly goal in hours"]
        #[min = 1]
        hours: Option<u32>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        if let Some(hours) = hours {
            settings::set_yearly_goal(db, hours).await?;
            ctx.say(format!("🎯 Yearly goal set to **{hours}h**.")).await?;
        } else {
            let current = settings::get_settings(db).await?;
            ctx.say(format!("🎯 Yearly goal: **{}h**", current.yearly_goal))
                .await?;
        }
        Ok(())
    }

    /// Lists the configured hour types.
    #[poise::command(slash_command, prefix_command)]
    pub async fn hour_types(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let current = settings::get_settings(&ctx.data().database).await?;

        let mut response = String::from("🏷️ **Hour Types**\n\n");
        for t in &current.hour_types {
            let limit = if t.has_limit {
                format!("shares the {MONTHLY_CAP_HOURS}h monthly cap")
            } else {
                "never capped".to_string()
            };
            writeln!(&mut response, "• **{}** (`{}`) - {limit}", t.name, t.id)?;
        }
        writeln!(
            &mut response,
            "\n{}/{MAX_CAPPED_TYPES} additional types in use.",
            current.capped_types().count()
        )?;

        ctx.say(response).await?;
        Ok(())
    }

    /// Adds an hour type that counts toward the shared monthly cap.
    #[poise::command(slash_command, prefix_command)]
    pub async fn add_hour_type(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Display name"] name: String,
    ) -> Result<()> {
        let added = settings::add_hour_type(&ctx.data().database, &name).await?;
        ctx.say(format!(
            "✅ Added hour type **{}** (`{}`).",
            added.name, added.id
        ))
        .await?;
        Ok(())
    }

    /// Renames an hour type.
    #[poise::command(slash_command, prefix_command)]
    pub async fn rename_hour_type(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Hour type to rename"]
        #[autocomplete = "autocomplete::autocomplete_hour_type"]
        hour_type: String,
        #[description = "New display name"] name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let target = find_type(db, &hour_type).await?;
        let renamed = settings::rename_hour_type(db, &target.id, &name).await?;
        ctx.say(format!(
            "✏️ Renamed **{}** to **{}**.",
            target.name, renamed.name
        ))
        .await?;
        Ok(())
    }

    /// Removes an hour type. Its entries are kept and show as "Unknown type".
    #[poise::command(slash_command, prefix_command)]
    pub async fn remove_hour_type(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Hour type to remove"]
        #[autocomplete = "autocomplete::autocomplete_capped_hour_type"]
        hour_type: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let target = find_type(db, &hour_type).await?;
        let removed = settings::remove_hour_type(db, &target.id).await?;
        ctx.say(format!(
            "🗑️ Removed **{}**. Its entries are kept and now show as \"{UNKNOWN_TYPE_NAME}\".",
            removed.name
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
