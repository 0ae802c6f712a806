//! Slash commands exposed by the bot.

use serenity::all::CreateCommand;

pub mod sign;

/// Every command the bot registers in its guild.
pub fn commands() -> Vec<CreateCommand> {
    vec![sign::register()]
}
