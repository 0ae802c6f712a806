use serenity::all::{ApplicationId, Client, GatewayIntents, GuildId};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration with token, application id and guild id
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the client could not be built or the gateway connection failed
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(GuildId::new(config.discord_guild_id));

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .application_id(ApplicationId::new(config.discord_client_id))
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
