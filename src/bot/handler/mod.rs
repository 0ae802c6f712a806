use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Guild the bot's commands are registered in
    pub guild_id: GuildId,
}

impl Handler {
    pub fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.guild_id, ctx, ready).await;
    }

    /// Called for every interaction: slash commands, button presses and more
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(ctx, interaction).await;
    }
}
