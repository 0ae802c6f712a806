//! Business logic of the signing bot.
//!
//! - `offer` - Offer state machine, builders and the lifecycle controller
//! - `discord` - Serenity-backed platform used by the lifecycle in production

pub mod discord;
pub mod offer;
