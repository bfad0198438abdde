//! Autocomplete handlers for Discord slash command parameters.

use crate::{bot::BotData, core::settings, errors::Error};

/// Hour type names matching the partial input, in settings order.
pub async fn autocomplete_hour_type(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(settings) = settings::get_settings(&ctx.data().database).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();
    settings
        .hour_types
        .into_iter()
        .filter(|t| t.name.to_lowercase().contains(&partial_lower))
        .map(|t| t.name)
        .take(25) // Discord autocomplete limit
        .collect()
}

/// Removable (capped) hour type names matching the partial input.
pub async fn autocomplete_capped_hour_type(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(settings) = settings::get_settings(&ctx.data().database).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();
    settings
        .capped_types()
        .filter(|t| t.name.to_lowercase().contains(&partial_lower))
        .map(|t| t.name.clone())
        .take(25)
        .collect()
}
