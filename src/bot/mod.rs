//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for service hour tracking,
//! including all slash commands, autocomplete handlers, and the shared bot
//! context.

/// Discord command implementations (entries, statistics, settings, general)
pub mod commands;
/// Discord interaction handlers (autocomplete)
pub mod handlers;

use crate::{
    core::navigation::PeriodNavigator,
    errors::{Error, Result},
};
use chrono::Local;
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Period currently selected in the statistics view
    pub navigator: Mutex<PeriodNavigator>,
}

impl BotData {
    /// Creates the bot context with the navigator on today's month.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            database,
            navigator: Mutex::new(PeriodNavigator::new(Local::now().date_naive())),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, "Command failed: {error:?}");
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::log(),
        commands::entries(),
        commands::edit_entry(),
        commands::delete_entry(),
        commands::clear_entries(),
        commands::stats(),
        commands::goal(),
        commands::hour_types(),
        commands::add_hour_type(),
        commands::rename_hour_type(),
        commands::remove_hour_type(),
    ]
}

/// Builds the poise framework and runs the Discord client until it stops.
///
/// Commands are registered in `dev_guild` when given (instant updates),
/// otherwise globally.
#[instrument(skip(token, database))]
pub async fn run_bot(
    token: String,
    database: DatabaseConnection,
    dev_guild: Option<serenity::GuildId>,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                let commands = &framework.options().commands;
                if let Some(guild_id) = dev_guild {
                    poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                    info!(%guild_id, "Registered commands in guild");
                } else {
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!("Registered commands globally");
                }
                Ok(BotData::new(database))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Starting Discord client");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await?;
    client.start().await?;
    Ok(())
}
