use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use service_buddy::{
    bot,
    config::{database, settings::load_seed_settings},
    core::settings::get_settings_or_seed,
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect and make sure all tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;
    info!("Database initialized");

    // 4. Seed settings on first run
    let seed = load_seed_settings()?;
    let settings = get_settings_or_seed(&db, &seed).await?;
    info!(
        yearly_goal = settings.yearly_goal,
        hour_types = settings.hour_types.len(),
        "Settings ready"
    );

    // 5. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))?;
    let dev_guild = match env::var("DEV_GUILD_ID") {
        Ok(raw) => Some(serenity::GuildId::new(raw.parse().map_err(|_| Error::Config {
            message: format!("DEV_GUILD_ID '{raw}' is not a valid guild id"),
        })?)),
        Err(_) => None,
    };

    bot::run_bot(token, db, dev_guild).await
}
