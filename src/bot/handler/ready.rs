//! Ready event handler for bot initialization.
//!
//! Fired when the bot connects to Discord's gateway and completes the initial handshake.
//! Command registration happens here because it needs the application id the gateway
//! reports back.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the bot's commands in the configured guild, replacing whatever was registered
/// before. A registration failure is logged and the bot keeps running without the command.
///
/// # Arguments
/// - `guild_id` - Guild to register commands in
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(guild_id: GuildId, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    tracing::info!("Registering commands in guild {}...", guild_id);

    match guild_id.set_commands(&ctx, command::commands()).await {
        Ok(registered) => {
            let names: Vec<&str> = registered.iter().map(|c| c.name.as_str()).collect();
            tracing::info!("Registered commands {:?} in guild {}", names, guild_id);
        }
        Err(e) => {
            tracing::error!(
                "Failed to register commands in guild {}: {:?}",
                guild_id,
                e
            );
        }
    }
}
