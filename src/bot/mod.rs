//! Discord bot integration.
//!
//! The bot registers the `sign` command in the configured guild once connected and dispatches
//! command interactions to their handlers. Serenity runs each event handler call in its own
//! task, so a pending offer waiting hours for a response doesn't block other invocations.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and role data
//! - `GUILD_MESSAGES` - Post announcements in guild channels
//! - `DIRECT_MESSAGES` - Receive button presses on offers sent by DM
//! - `GUILD_MEMBERS` - List guild members to compute roster occupancy (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
