//! Serenity-backed `SigningPlatform`.
//!
//! Bound to a single `sign` command interaction, which must already have been deferred
//! ephemerally: private replies are sent as ephemeral follow-ups.

use serenity::all::{
    ChannelId, CommandInteraction, ComponentInteractionCollector, Context,
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateMessage, GuildId,
    MessageId, RoleId, UserId,
};
use serenity::async_trait;
use std::time::Duration;

use crate::{
    error::AppError,
    model::{discord::UserRef, offer::OfferResponse, team::TeamRole},
    service::{
        discord::roster::{count_role_holders, find_role_by_name},
        offer::{
            builder::{OfferMessage, SigningAnnouncement},
            machine::Delivery,
            platform::SigningPlatform,
        },
    },
};

/// Maximum page size Discord allows when listing guild members.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Audit log reason attached to role additions.
const JOIN_AUDIT_REASON: &str = "Accepted team offer";

pub struct DiscordSigningPlatform<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    guild_id: GuildId,
}

impl<'a> DiscordSigningPlatform<'a> {
    /// Creates a platform bound to one command interaction.
    ///
    /// # Arguments
    /// - `ctx` - Serenity context of the interaction event
    /// - `command` - The deferred `sign` command interaction
    /// - `guild_id` - Guild the command was invoked in
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction, guild_id: GuildId) -> Self {
        Self {
            ctx,
            command,
            guild_id,
        }
    }
}

#[async_trait]
impl SigningPlatform for DiscordSigningPlatform<'_> {
    async fn find_team_role(&self, team: &str) -> Result<Option<TeamRole>, AppError> {
        let roles = self.ctx.http.get_guild_roles(self.guild_id).await?;

        Ok(find_role_by_name(&roles, team).map(TeamRole::from))
    }

    /// Counts role holders across every page of the guild member list.
    ///
    /// Requires the `GUILD_MEMBERS` privileged intent.
    async fn roster_count(&self, role: &TeamRole) -> Result<usize, AppError> {
        let role_id = RoleId::new(role.role_id);
        let mut count = 0;
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .ctx
                .http
                .get_guild_members(self.guild_id, Some(MEMBER_PAGE_SIZE), after)
                .await?;

            count += count_role_holders(&members, role_id);

            if members.len() < MEMBER_PAGE_SIZE as usize {
                break;
            }

            after = members.last().map(|member| member.user.id.get());
        }

        tracing::debug!(
            "Role {} has {} members in guild {}",
            role.name,
            count,
            self.guild_id
        );

        Ok(count)
    }

    async fn deliver_offer(
        &self,
        player: &UserRef,
        message: &OfferMessage,
    ) -> Result<Delivery, AppError> {
        let dm_channel = UserId::new(player.id).create_dm_channel(self.ctx).await?;
        let sent = dm_channel
            .id
            .send_message(&self.ctx.http, message.to_message()?)
            .await?;

        Ok(Delivery {
            dm_channel_id: dm_channel.id.get(),
            message_id: sent.id.get(),
        })
    }

    async fn reply_private(&self, content: &str) -> Result<(), AppError> {
        self.command
            .create_followup(
                &self.ctx.http,
                CreateInteractionResponseFollowup::new()
                    .content(content)
                    .ephemeral(true),
            )
            .await?;

        Ok(())
    }

    async fn await_response(
        &self,
        message_id: u64,
        player: &UserRef,
        timeout: Duration,
    ) -> Option<OfferResponse> {
        let interaction = ComponentInteractionCollector::new(self.ctx)
            .message_id(MessageId::new(message_id))
            .author_id(UserId::new(player.id))
            .timeout(timeout)
            .filter(|interaction| {
                OfferResponse::from_custom_id(&interaction.data.custom_id).is_some()
            })
            .next()
            .await?;

        // Without an acknowledgement the client shows the press as failed
        if let Err(e) = interaction
            .create_response(&self.ctx.http, CreateInteractionResponse::Acknowledge)
            .await
        {
            tracing::warn!(
                "Failed to acknowledge offer response from {}: {:?}",
                player.tag,
                e
            );
        }

        OfferResponse::from_custom_id(&interaction.data.custom_id)
    }

    async fn add_team_role(&self, player: &UserRef, role: &TeamRole) -> Result<(), AppError> {
        self.ctx
            .http
            .add_member_role(
                self.guild_id,
                UserId::new(player.id),
                RoleId::new(role.role_id),
                Some(JOIN_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn announce(&self, announcement: &SigningAnnouncement) -> Result<(), AppError> {
        self.command
            .channel_id
            .send_message(
                &self.ctx.http,
                CreateMessage::new().embed(announcement.to_embed()?),
            )
            .await?;

        Ok(())
    }

    async fn notify_player(&self, dm_channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(dm_channel_id)
            .say(&self.ctx.http, content)
            .await?;

        Ok(())
    }
}
