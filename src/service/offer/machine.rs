//! Offer lifecycle state machine.
//!
//! `transition` is a pure function from the current state and an event to the next state and
//! the side effects to perform. It never performs I/O; `OfferLifecycle` interprets the effects
//! against a `SigningPlatform` and feeds the results back in as events.
//!
//! ```text
//! Idle -> RoleResolving -> DmOpening -> AwaitingResponse -+-> Joining -+-> Accepted
//!   |           |              |                          |            +-> JoinFailed
//!   +-----------+--------------+--> Aborted               +-> Declined
//!                                                         +-> Expired
//! ```
//!
//! An event the current state does not expect leaves the state untouched and produces no
//! effects, so terminal states are absorbing and a second response is ignored.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::{
    model::{
        offer::{Offer, OfferOutcome, OfferResponse, OutcomeCell},
        team::{is_registered_team, ResolvedTeam, TeamRole},
    },
    service::offer::builder::{
        build_offer_message, build_signing_announcement, OfferMessage, SigningAnnouncement,
    },
};

pub const ROLE_NOT_FOUND_REPLY: &str = "❌ Team role not found!";
pub const LOOKUP_FAILED_REPLY: &str = "❌ Couldn't look up the team roster, please try again.";
pub const DECLINED_NOTICE: &str = "❌ You declined the offer.";
pub const EXPIRED_NOTICE: &str = "⏰ The offer expired.";
pub const JOIN_FAILED_NOTICE: &str = "Something went wrong adding you to the team.";

/// Handles to the delivered offer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Direct message channel with the player.
    pub dm_channel_id: u64,
    /// The offer message, used to scope the response window.
    pub message_id: u64,
}

/// Why a lifecycle ended before an offer reached the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    RoleNotFound,
    LookupFailed,
    DmUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferState {
    Idle,
    RoleResolving,
    DmOpening {
        team: ResolvedTeam,
    },
    AwaitingResponse {
        team: ResolvedTeam,
        delivery: Delivery,
    },
    /// Player accepted; the team role is being added.
    Joining {
        team: ResolvedTeam,
        delivery: Delivery,
    },
    Accepted,
    /// Player accepted but the team role could not be added.
    JoinFailed,
    Declined,
    Expired,
    Aborted(AbortReason),
}

impl OfferState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Accepted | Self::JoinFailed | Self::Declined | Self::Expired | Self::Aborted(_)
        )
    }
}

/// Result of looking up a team's role and roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamLookup {
    Found(ResolvedTeam),
    /// No guild role has the team's exact name.
    Missing,
    /// The platform could not be queried.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferEvent {
    /// `sign` was invoked.
    Invoked,
    /// Role lookup finished.
    TeamResolved(TeamLookup),
    /// DM delivery finished, `None` when the player can't be messaged.
    OfferDelivered {
        delivery: Option<Delivery>,
        at: DateTime<Utc>,
    },
    /// The player pressed one of the offer buttons.
    Responded(OfferResponse),
    /// The response window timed out without a response.
    WindowClosed,
    /// Team role mutation finished, carrying the recomputed roster on success.
    RoleAdded {
        roster: Option<usize>,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OfferEffect {
    /// Look up the team role and count its current members.
    ResolveTeam { team: String },
    /// Open a DM channel with the player and send the offer into it.
    DeliverOffer { message: OfferMessage },
    /// Ephemeral reply to the user who invoked `sign`.
    ReplyPrivate { content: String },
    /// Wait for the player's first response to the offer message.
    OpenWindow {
        message_id: u64,
        timeout: Duration,
    },
    /// Give the player the team role and recount the roster.
    AddTeamRole {
        role: TeamRole,
        /// Roster shown in the offer, used when the recount fails.
        offered_roster: usize,
    },
    /// Post the signing announcement in the channel `sign` was invoked in.
    Announce { announcement: SigningAnnouncement },
    /// Direct message to the player.
    NotifyPlayer {
        dm_channel_id: u64,
        content: String,
    },
}

/// Computes the next state and the side effects of applying `event` in `state`.
///
/// # Arguments
/// - `offer` - The offer this lifecycle belongs to
/// - `state` - Current state
/// - `event` - Event observed in that state
///
/// # Returns
/// - `(OfferState, Vec<OfferEffect>)` - Next state and the effects to perform in order.
///   Unexpected events return `state` unchanged with no effects.
pub fn transition(
    offer: &Offer,
    state: OfferState,
    event: OfferEvent,
) -> (OfferState, Vec<OfferEffect>) {
    match (state, event) {
        (OfferState::Idle, OfferEvent::Invoked) => {
            if !is_registered_team(&offer.team) {
                return abort(AbortReason::RoleNotFound, ROLE_NOT_FOUND_REPLY.to_string());
            }

            (
                OfferState::RoleResolving,
                vec![OfferEffect::ResolveTeam {
                    team: offer.team.clone(),
                }],
            )
        }

        (OfferState::RoleResolving, OfferEvent::TeamResolved(result)) => match result {
            TeamLookup::Found(team) => {
                let message = build_offer_message(offer, team.roster);
                (
                    OfferState::DmOpening { team },
                    vec![OfferEffect::DeliverOffer { message }],
                )
            }
            TeamLookup::Missing => {
                abort(AbortReason::RoleNotFound, ROLE_NOT_FOUND_REPLY.to_string())
            }
            TeamLookup::Failed => {
                abort(AbortReason::LookupFailed, LOOKUP_FAILED_REPLY.to_string())
            }
        },

        (OfferState::DmOpening { team }, OfferEvent::OfferDelivered { delivery, at }) => {
            match delivery {
                Some(delivery) => (
                    OfferState::AwaitingResponse { team, delivery },
                    vec![
                        OfferEffect::ReplyPrivate {
                            content: format!("✅ Offer sent to {}.", offer.player.tag),
                        },
                        OfferEffect::OpenWindow {
                            message_id: delivery.message_id,
                            timeout: offer.remaining(at),
                        },
                    ],
                ),
                None => abort(
                    AbortReason::DmUnavailable,
                    format!(
                        "Couldn't DM {}. They may have DMs disabled.",
                        offer.player.tag
                    ),
                ),
            }
        }

        (
            OfferState::AwaitingResponse { team, delivery },
            OfferEvent::Responded(OfferResponse::Accept),
        ) => {
            let effect = OfferEffect::AddTeamRole {
                role: team.role.clone(),
                offered_roster: team.roster,
            };
            (OfferState::Joining { team, delivery }, vec![effect])
        }

        (
            OfferState::AwaitingResponse { delivery, .. },
            OfferEvent::Responded(OfferResponse::Decline),
        ) => (
            OfferState::Declined,
            vec![notify(delivery, DECLINED_NOTICE.to_string())],
        ),

        (OfferState::AwaitingResponse { delivery, .. }, OfferEvent::WindowClosed) => (
            OfferState::Expired,
            vec![notify(delivery, EXPIRED_NOTICE.to_string())],
        ),

        (OfferState::Joining { delivery, .. }, OfferEvent::RoleAdded { roster, at }) => {
            match roster {
                Some(roster) => (
                    OfferState::Accepted,
                    vec![
                        OfferEffect::Announce {
                            announcement: build_signing_announcement(offer, roster, at),
                        },
                        notify(
                            delivery,
                            format!("✅ You have successfully joined the **{}**!", offer.team),
                        ),
                    ],
                ),
                None => (
                    OfferState::JoinFailed,
                    vec![notify(delivery, JOIN_FAILED_NOTICE.to_string())],
                ),
            }
        }

        (state, _) => (state, Vec::new()),
    }
}

fn abort(reason: AbortReason, content: String) -> (OfferState, Vec<OfferEffect>) {
    (
        OfferState::Aborted(reason),
        vec![OfferEffect::ReplyPrivate { content }],
    )
}

fn notify(delivery: Delivery, content: String) -> OfferEffect {
    OfferEffect::NotifyPlayer {
        dm_channel_id: delivery.dm_channel_id,
        content,
    }
}

/// Outcome recorded when entering `state`, if it resolves the offer.
fn outcome_of(state: &OfferState) -> Option<OfferOutcome> {
    match state {
        OfferState::Joining { .. } => Some(OfferOutcome::Accepted),
        OfferState::Declined => Some(OfferOutcome::Declined),
        OfferState::Expired => Some(OfferOutcome::Expired),
        _ => None,
    }
}

/// A single offer's lifecycle: the offer, its current state and its write-once outcome.
#[derive(Debug)]
pub struct OfferMachine {
    offer: Offer,
    state: OfferState,
    outcome: OutcomeCell,
}

impl OfferMachine {
    pub fn new(offer: Offer) -> Self {
        Self {
            offer,
            state: OfferState::Idle,
            outcome: OutcomeCell::new(),
        }
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn state(&self) -> &OfferState {
        &self.state
    }

    pub fn outcome(&self) -> OfferOutcome {
        self.outcome.get()
    }

    /// Applies an event and returns the effects to perform.
    ///
    /// A transition that would resolve an already resolved offer is discarded, leaving the
    /// state as it was.
    pub fn apply(&mut self, event: OfferEvent) -> Vec<OfferEffect> {
        let (next, effects) = transition(&self.offer, self.state.clone(), event);

        if let Some(outcome) = outcome_of(&next) {
            if !self.outcome.resolve(outcome) {
                return Vec::new();
            }
        }

        self.state = next;
        effects
    }
}
