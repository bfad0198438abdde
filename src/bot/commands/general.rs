//! General Discord commands - ping and help.
//! Neither command touches the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**ServiceBuddy Help**\n\
        Track service hours across the service year (September to August).\n\n\
        **Entries**\n\
        • `/log <hours> <minutes> [type] [date] [notes]` - Records time (date defaults to today).\n\
        • `/entries [date] [limit]` - Lists recent entries, or all entries for one date.\n\
        • `/edit_entry <id> ...` - Changes an entry's time, date, type or notes.\n\
        • `/delete_entry <id>` - Deletes one entry.\n\
        • `/clear_entries confirm:true` - Deletes every entry (settings are kept).\n\n\
        **Statistics**\n\
        • `/stats [navigate]` - Monthly and yearly totals, pacing and targets. \
        Navigate by month or service year, or jump back to the current month.\n\n\
        **Settings**\n\
        • `/goal [hours]` - Shows or sets the yearly goal.\n\
        • `/hour_types` - Lists hour types.\n\
        • `/add_hour_type <name>` - Adds a type that shares the 55h monthly cap.\n\
        • `/rename_hour_type <type> <name>` - Renames a type.\n\
        • `/remove_hour_type <type>` - Removes a type; its entries show as \"Unknown type\".\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
