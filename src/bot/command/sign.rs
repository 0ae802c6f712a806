//! `/sign` command: offer a player a spot on a team.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, ResolvedOption, ResolvedValue,
};

use crate::{
    model::{discord::UserRef, offer::Offer, team::TEAM_NAMES},
    service::{discord::DiscordSigningPlatform, offer::OfferLifecycle},
};

pub const COMMAND_NAME: &str = "sign";

const PLAYER_OPTION: &str = "player";
const TEAM_OPTION: &str = "team";

const GUILD_ONLY_REPLY: &str = "This command can only be used in a server.";
const INVALID_OPTIONS_REPLY: &str = "❌ Please provide both a player and a team.";

/// Builds the `sign` command declaration.
///
/// Both options are required; `team` is limited to the registered team names.
pub fn register() -> CreateCommand {
    let team_option = TEAM_NAMES.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, TEAM_OPTION, "The team to offer")
            .required(true),
        |option, team| option.add_string_choice(*team, *team),
    );

    CreateCommand::new(COMMAND_NAME)
        .description("Send a team offer to a player.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, PLAYER_OPTION, "The player to sign")
                .required(true),
        )
        .add_option(team_option)
}

/// Player and team supplied to a `sign` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub player: UserRef,
    pub team: String,
}

impl SignRequest {
    /// Extracts the request from the resolved command options.
    ///
    /// # Returns
    /// - `Some(SignRequest)` - Both options were present with the expected types
    /// - `None` - An option is missing or has an unexpected type
    pub fn from_options(options: &[ResolvedOption<'_>]) -> Option<Self> {
        let mut player = None;
        let mut team = None;

        for option in options {
            match (option.name, &option.value) {
                (PLAYER_OPTION, ResolvedValue::User(user, _)) => player = Some(UserRef::from(*user)),
                (TEAM_OPTION, ResolvedValue::String(value)) => team = Some(value.to_string()),
                _ => {}
            }
        }

        Some(Self {
            player: player?,
            team: team?,
        })
    }
}

/// Runs a `sign` invocation from interaction to offer resolution.
///
/// The interaction is deferred ephemerally up front so role and member lookups can't miss
/// Discord's acknowledgement deadline. The call then stays suspended until the player
/// answers or the offer expires.
///
/// # Arguments
/// - `ctx` - Discord context of the interaction event
/// - `command` - The `sign` command interaction
pub async fn run(ctx: &Context, command: &CommandInteraction) {
    let Some(guild_id) = command.guild_id else {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(GUILD_ONLY_REPLY)
                .ephemeral(true),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Failed to reply to /sign outside a guild: {:?}", e);
        }
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /sign from {}: {:?}", command.user.name, e);
        return;
    }

    let Some(request) = SignRequest::from_options(&command.data.options()) else {
        tracing::warn!("Received /sign from {} with invalid options", command.user.name);
        let followup = CreateInteractionResponseFollowup::new()
            .content(INVALID_OPTIONS_REPLY)
            .ephemeral(true);
        if let Err(e) = command.create_followup(&ctx.http, followup).await {
            tracing::error!("Failed to reply to invalid /sign: {:?}", e);
        }
        return;
    };

    let offer = Offer::new(
        request.player,
        request.team,
        UserRef::from(&command.user),
        Utc::now(),
    );

    tracing::info!(
        "{} is offering {} a spot on {}",
        offer.sender.tag,
        offer.player.tag,
        offer.team
    );

    let platform = DiscordSigningPlatform::new(ctx, command, guild_id);
    let machine = OfferLifecycle::new(&platform).run(offer).await;

    tracing::info!(
        "Offer to {} for {} finished in state {:?} with outcome {:?}",
        machine.offer().player.tag,
        machine.offer().team,
        machine.state(),
        machine.outcome()
    );
}
