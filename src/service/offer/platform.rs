//! Capabilities the offer lifecycle needs from the chat platform.
//!
//! The Discord implementation lives in `service::discord::platform`; tests drive the lifecycle
//! with a recording fake instead.

use serenity::async_trait;
use std::time::Duration;

use crate::{
    error::AppError,
    model::{discord::UserRef, offer::OfferResponse, team::TeamRole},
    service::offer::{
        builder::{OfferMessage, SigningAnnouncement},
        machine::Delivery,
    },
};

/// Platform operations used while running a single offer.
///
/// An implementation is bound to one `sign` invocation: private replies go to its invoker and
/// announcements to the channel it was issued in.
#[async_trait]
pub trait SigningPlatform: Send + Sync {
    /// Finds the guild role whose name equals `team` exactly.
    async fn find_team_role(&self, team: &str) -> Result<Option<TeamRole>, AppError>;

    /// Counts guild members currently holding `role`.
    async fn roster_count(&self, role: &TeamRole) -> Result<usize, AppError>;

    /// Opens a DM channel with `player` and sends the offer into it.
    async fn deliver_offer(
        &self,
        player: &UserRef,
        message: &OfferMessage,
    ) -> Result<Delivery, AppError>;

    /// Sends a reply only the invoking user can see.
    async fn reply_private(&self, content: &str) -> Result<(), AppError>;

    /// Waits for `player` to press a response button on the offer message.
    ///
    /// Resolves with the first response observed, or `None` once `timeout` elapses. Only one
    /// response is ever returned per call.
    async fn await_response(
        &self,
        message_id: u64,
        player: &UserRef,
        timeout: Duration,
    ) -> Option<OfferResponse>;

    /// Adds `role` to the player's guild membership.
    async fn add_team_role(&self, player: &UserRef, role: &TeamRole) -> Result<(), AppError>;

    /// Posts the signing announcement publicly.
    async fn announce(&self, announcement: &SigningAnnouncement) -> Result<(), AppError>;

    /// Sends a plain text message into the player's DM channel.
    async fn notify_player(&self, dm_channel_id: u64, content: &str) -> Result<(), AppError>;
}
