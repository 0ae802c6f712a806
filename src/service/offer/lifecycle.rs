//! Offer lifecycle controller.
//!
//! Drives an `OfferMachine` from invocation to a terminal state, performing each effect
//! against a `SigningPlatform` and feeding the outcome back as the next event. Effects of one
//! transition run strictly in order, so the invoker is only acknowledged after the offer was
//! delivered and the announcement only goes out after the role was added.

use chrono::Utc;
use std::collections::VecDeque;

use crate::{
    model::{
        offer::Offer,
        team::{ResolvedTeam, TeamRole},
    },
    service::offer::{
        machine::{OfferEffect, OfferEvent, OfferMachine, TeamLookup},
        platform::SigningPlatform,
    },
};

/// Runs offers against a platform.
pub struct OfferLifecycle<'a, P: SigningPlatform> {
    platform: &'a P,
}

impl<'a, P: SigningPlatform> OfferLifecycle<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Runs an offer to completion.
    ///
    /// Suspends while waiting for the player's response, at most until the offer expires.
    /// Platform failures are logged and mapped onto the machine's failure events; none of them
    /// escape this function.
    ///
    /// # Arguments
    /// - `offer` - Freshly created offer for one `sign` invocation
    ///
    /// # Returns
    /// - `OfferMachine` - The machine in its terminal state with the recorded outcome
    pub async fn run(&self, offer: Offer) -> OfferMachine {
        let mut machine = OfferMachine::new(offer);
        let mut events = VecDeque::from([OfferEvent::Invoked]);

        while let Some(event) = events.pop_front() {
            for effect in machine.apply(event) {
                if let Some(next) = self.perform(machine.offer(), effect).await {
                    events.push_back(next);
                }
            }
        }

        if !machine.state().is_terminal() {
            tracing::warn!(
                "Offer to {} for {} stopped in non-terminal state {:?}",
                machine.offer().player.tag,
                machine.offer().team,
                machine.state()
            );
        }

        machine
    }

    async fn perform(&self, offer: &Offer, effect: OfferEffect) -> Option<OfferEvent> {
        match effect {
            OfferEffect::ResolveTeam { team } => {
                Some(OfferEvent::TeamResolved(self.resolve_team(&team).await))
            }

            OfferEffect::DeliverOffer { message } => {
                let delivery = match self.platform.deliver_offer(&offer.player, &message).await {
                    Ok(delivery) => {
                        tracing::info!(
                            "Sent {} offer to {} on behalf of {}",
                            offer.team,
                            offer.player.tag,
                            offer.sender.tag
                        );
                        Some(delivery)
                    }
                    Err(e) => {
                        tracing::warn!("Failed to DM offer to {}: {:?}", offer.player.tag, e);
                        None
                    }
                };

                Some(OfferEvent::OfferDelivered {
                    delivery,
                    at: Utc::now(),
                })
            }

            OfferEffect::ReplyPrivate { content } => {
                if let Err(e) = self.platform.reply_private(&content).await {
                    tracing::error!(
                        "Failed to reply to {} about {} offer: {:?}",
                        offer.sender.tag,
                        offer.team,
                        e
                    );
                }
                None
            }

            OfferEffect::OpenWindow {
                message_id,
                timeout,
            } => {
                tracing::debug!(
                    "Waiting up to {:?} for {} to answer {} offer",
                    timeout,
                    offer.player.tag,
                    offer.team
                );

                let event = match self
                    .platform
                    .await_response(message_id, &offer.player, timeout)
                    .await
                {
                    Some(response) => {
                        tracing::info!(
                            "{} answered {} offer with {:?}",
                            offer.player.tag,
                            offer.team,
                            response
                        );
                        OfferEvent::Responded(response)
                    }
                    None => {
                        tracing::info!("{} offer to {} expired", offer.team, offer.player.tag);
                        OfferEvent::WindowClosed
                    }
                };

                Some(event)
            }

            OfferEffect::AddTeamRole {
                role,
                offered_roster,
            } => {
                let roster = self.join_team(offer, &role, offered_roster).await;

                Some(OfferEvent::RoleAdded {
                    roster,
                    at: Utc::now(),
                })
            }

            OfferEffect::Announce { announcement } => {
                if let Err(e) = self.platform.announce(&announcement).await {
                    tracing::error!(
                        "Failed to announce signing of {} to {}: {:?}",
                        offer.player.tag,
                        offer.team,
                        e
                    );
                }
                None
            }

            OfferEffect::NotifyPlayer {
                dm_channel_id,
                content,
            } => {
                if let Err(e) = self.platform.notify_player(dm_channel_id, &content).await {
                    tracing::error!("Failed to notify {}: {:?}", offer.player.tag, e);
                }
                None
            }
        }
    }

    /// Looks up the team role and counts its current members.
    async fn resolve_team(&self, team: &str) -> TeamLookup {
        let role = match self.platform.find_team_role(team).await {
            Ok(Some(role)) => role,
            Ok(None) => {
                tracing::debug!("No role named {} in guild", team);
                return TeamLookup::Missing;
            }
            Err(e) => {
                tracing::error!("Failed to look up role for team {}: {:?}", team, e);
                return TeamLookup::Failed;
            }
        };

        match self.platform.roster_count(&role).await {
            Ok(roster) => TeamLookup::Found(ResolvedTeam { role, roster }),
            Err(e) => {
                tracing::error!("Failed to count roster of team {}: {:?}", team, e);
                TeamLookup::Failed
            }
        }
    }

    /// Adds the team role to the player and recounts the roster.
    ///
    /// # Returns
    /// - `Some(roster)` - Role added; roster recounted, or the offered roster plus the new
    ///   member if the recount failed
    /// - `None` - The role could not be added
    async fn join_team(
        &self,
        offer: &Offer,
        role: &TeamRole,
        offered_roster: usize,
    ) -> Option<usize> {
        if let Err(e) = self.platform.add_team_role(&offer.player, role).await {
            tracing::error!(
                "Failed to add role {} to {}: {:?}",
                role.name,
                offer.player.tag,
                e
            );
            return None;
        }

        tracing::info!("{} joined {}", offer.player.tag, offer.team);

        match self.platform.roster_count(role).await {
            Ok(roster) => Some(roster),
            Err(e) => {
                tracing::warn!("Failed to recount roster of team {}: {:?}", offer.team, e);
                Some(offered_roster + 1)
            }
        }
    }
}
