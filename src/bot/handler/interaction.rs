//! Interaction event handler.
//!
//! Routes slash command invocations to their command module. Button presses are not handled
//! here; they are consumed by the response collector of the offer they belong to.

use serenity::all::{Context, Interaction};

use crate::bot::command::sign;

/// Handles the interaction_create event.
///
/// # Arguments
/// - `ctx` - Discord context for responding to the interaction
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    match command.data.name.as_str() {
        sign::COMMAND_NAME => sign::run(&ctx, &command).await,
        other => tracing::debug!("Ignoring unknown command /{}", other),
    }
}
