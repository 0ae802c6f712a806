//! Discord (Serenity) implementation of the platform capabilities.

pub mod platform;
pub mod roster;

pub use platform::DiscordSigningPlatform;
