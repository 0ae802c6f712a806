//! Offer and signing announcement builders.
//!
//! Builders here are pure: they turn an `Offer` and a roster count into plain message models
//! without touching the network. Conversion into Serenity builders happens in `to_message` /
//! `to_embed`, which only fail when a timestamp cannot be represented by Discord.

use chrono::{DateTime, Utc};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateMessage,
    Timestamp,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        offer::{Offer, OfferResponse},
        team::roster_display,
    },
};

/// Gold embed colour used for offers and announcements.
pub const OFFER_COLOR: u32 = 0xFFD700;

/// Footer text shown on every embed the bot sends.
pub const FOOTER_TEXT: &str = "MLRB Bot";

/// Single name/value pair rendered as an embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn inline(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value,
            inline: true,
        }
    }
}

/// Response control attached below the offer embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferButton {
    pub response: OfferResponse,
    pub label: &'static str,
    pub style: ButtonStyle,
}

/// Offer direct message as delivered to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferMessage {
    pub title: String,
    pub description: String,
    /// Expires, Roster and Sent By, in that order.
    pub fields: Vec<EmbedField>,
    pub color: u32,
    pub sent_at: DateTime<Utc>,
    /// Accept then Decline.
    pub buttons: [OfferButton; 2],
}

/// Public message posted in the invoking channel after a player joins a team.
#[derive(Debug, Clone, PartialEq)]
pub struct SigningAnnouncement {
    pub title: String,
    pub description: String,
    /// Roster occupancy after the player joined.
    pub roster: usize,
    pub color: u32,
    pub sent_at: DateTime<Utc>,
}

/// Builds the offer direct message for a player.
///
/// # Arguments
/// - `offer` - Offer being sent, providing team, sender and expiration
/// - `roster` - Number of members currently holding the team role
///
/// # Returns
/// - `OfferMessage` - Title, body, three inline fields and the Accept/Decline buttons
pub fn build_offer_message(offer: &Offer, roster: usize) -> OfferMessage {
    OfferMessage {
        title: format!("{} | Offer Received", offer.team),
        description: format!(
            "You have received an offer to join **{}**.\nDo you accept?",
            offer.team
        ),
        fields: vec![
            EmbedField::inline(
                "⌛ Expires",
                format!("<t:{}:F>", offer.expires_at.timestamp()),
            ),
            EmbedField::inline("🔋 Roster", roster_display(roster)),
            EmbedField::inline("🧢 Sent By", offer.sender.mention()),
        ],
        color: OFFER_COLOR,
        sent_at: offer.created_at,
        buttons: [
            OfferButton {
                response: OfferResponse::Accept,
                label: "Accept",
                style: ButtonStyle::Success,
            },
            OfferButton {
                response: OfferResponse::Decline,
                label: "Decline",
                style: ButtonStyle::Danger,
            },
        ],
    }
}

/// Builds the public announcement for an accepted offer.
///
/// # Arguments
/// - `offer` - The accepted offer
/// - `roster` - Roster occupancy recomputed after the player received the team role
/// - `sent_at` - Time the announcement is posted
///
/// # Returns
/// - `SigningAnnouncement` - Announcement naming player, team, roster and signer
pub fn build_signing_announcement(
    offer: &Offer,
    roster: usize,
    sent_at: DateTime<Utc>,
) -> SigningAnnouncement {
    SigningAnnouncement {
        title: "MLRB | Player Signing".to_string(),
        description: format!(
            "**{}** has accepted an offer from **{}**.\n\n📋 **Roster:** {}\n👤 **Signed By:** {}",
            offer.player.mention(),
            offer.team,
            roster_display(roster),
            offer.sender.mention()
        ),
        roster,
        color: OFFER_COLOR,
        sent_at,
    }
}

impl OfferMessage {
    /// Converts the offer into a Serenity message with embed and button row.
    ///
    /// # Returns
    /// - `Ok(CreateMessage)` - Message ready to send into the player's DM channel
    /// - `Err(AppError::InternalErr)` - `sent_at` is outside Discord's timestamp range
    pub fn to_message(&self) -> Result<CreateMessage, AppError> {
        let mut embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .color(self.color)
            .footer(CreateEmbedFooter::new(FOOTER_TEXT))
            .timestamp(discord_timestamp(self.sent_at)?);

        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        let buttons = self
            .buttons
            .iter()
            .map(|button| {
                CreateButton::new(button.response.custom_id())
                    .label(button.label)
                    .style(button.style)
            })
            .collect();

        Ok(CreateMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(buttons)]))
    }
}

impl SigningAnnouncement {
    /// Converts the announcement into a Serenity embed.
    ///
    /// # Returns
    /// - `Ok(CreateEmbed)` - Embed ready for posting
    /// - `Err(AppError::InternalErr)` - `sent_at` is outside Discord's timestamp range
    pub fn to_embed(&self) -> Result<CreateEmbed, AppError> {
        Ok(CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .color(self.color)
            .footer(CreateEmbedFooter::new(FOOTER_TEXT))
            .timestamp(discord_timestamp(self.sent_at)?))
    }
}

fn discord_timestamp(at: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(at.timestamp()).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: at.timestamp(),
            reason: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::discord::UserRef;
    use chrono::{Duration, TimeZone};

    fn vikings_offer() -> Offer {
        Offer::new(
            UserRef::new(222222222, "rookie"),
            "Vikings",
            UserRef::new(333333333, "manager"),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    /// Tests the offer message content for a team with three members.
    ///
    /// Expected: roster "3/20", expiration four hours after creation, sender mention
    #[test]
    fn builds_offer_fields() {
        let offer = vikings_offer();

        let message = build_offer_message(&offer, 3);

        assert_eq!(message.title, "Vikings | Offer Received");
        assert!(message.description.contains("**Vikings**"));
        assert!(message.description.ends_with("Do you accept?"));

        let expected_expiry = offer.created_at + Duration::hours(4);
        assert_eq!(
            message.fields,
            vec![
                EmbedField::inline("⌛ Expires", format!("<t:{}:F>", expected_expiry.timestamp())),
                EmbedField::inline("🔋 Roster", "3/20".to_string()),
                EmbedField::inline("🧢 Sent By", "<@333333333>".to_string()),
            ]
        );
        assert_eq!(message.color, OFFER_COLOR);
    }

    #[test]
    fn offer_has_accept_and_decline_buttons() {
        let message = build_offer_message(&vikings_offer(), 0);

        assert_eq!(message.buttons[0].response, OfferResponse::Accept);
        assert_eq!(message.buttons[0].label, "Accept");
        assert_eq!(message.buttons[0].style, ButtonStyle::Success);
        assert_eq!(message.buttons[1].response, OfferResponse::Decline);
        assert_eq!(message.buttons[1].style, ButtonStyle::Danger);
    }

    #[test]
    fn announcement_names_player_team_and_signer() {
        let offer = vikings_offer();
        let sent_at = offer.created_at + Duration::minutes(5);

        let announcement = build_signing_announcement(&offer, 4, sent_at);

        assert_eq!(announcement.title, "MLRB | Player Signing");
        assert_eq!(announcement.roster, 4);
        assert_eq!(
            announcement.description,
            "**<@222222222>** has accepted an offer from **Vikings**.\n\n📋 **Roster:** 4/20\n👤 **Signed By:** <@333333333>"
        );
    }

    /// Tests conversion into the Serenity message payload.
    ///
    /// Expected: embed title and both button custom ids present in the serialized payload
    #[test]
    fn converts_offer_into_serenity_message() {
        let message = build_offer_message(&vikings_offer(), 3).to_message().unwrap();

        let raw = serde_json::to_string(&message).unwrap();

        assert!(raw.contains("Vikings | Offer Received"));
        assert!(raw.contains(r#""custom_id":"accept""#));
        assert!(raw.contains(r#""custom_id":"decline""#));
    }
}
