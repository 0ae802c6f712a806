//! Domain models for the signing bot.
//!
//! Models are plain data decoupled from Serenity so the offer lifecycle can be built and tested
//! without a Discord connection. Conversions from Serenity types happen at the edges via
//! `From` impls or explicit constructors.

pub mod discord;
pub mod offer;
pub mod team;
