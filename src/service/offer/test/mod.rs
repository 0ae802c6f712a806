use chrono::Utc;
use serenity::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::{
    error::AppError,
    model::{
        discord::UserRef,
        offer::{Offer, OfferOutcome, OfferResponse},
        team::TeamRole,
    },
    service::offer::{
        builder::{OfferMessage, SigningAnnouncement},
        lifecycle::OfferLifecycle,
        machine::{
            AbortReason, Delivery, OfferState, DECLINED_NOTICE, EXPIRED_NOTICE,
            JOIN_FAILED_NOTICE, ROLE_NOT_FOUND_REPLY,
        },
        platform::SigningPlatform,
    },
};

mod decline;
mod single_response;

const PLAYER_ID: u64 = 222222222;
const SENDER_ID: u64 = 333333333;
const VIKINGS_ROLE_ID: u64 = 111111111;
const DM_CHANNEL_ID: u64 = 444444444;
const OFFER_MESSAGE_ID: u64 = 555555555;

/// Platform call recorded by `FakePlatform`, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    FindTeamRole(String),
    RosterCount(u64),
    DeliverOffer { player: u64, message: OfferMessage },
    ReplyPrivate(String),
    AwaitResponse { message_id: u64, player: u64, timeout: Duration },
    AddTeamRole { player: u64, role_id: u64 },
    Announce(SigningAnnouncement),
    NotifyPlayer { dm_channel_id: u64, content: String },
}

/// In-memory guild standing in for Discord.
///
/// Roles and their holders live in memory, responses are scripted and every call is recorded
/// so tests can assert on order and count.
#[derive(Default)]
struct FakePlatform {
    roles: Vec<TeamRole>,
    holders: Mutex<HashMap<u64, HashSet<u64>>>,
    dms_disabled: bool,
    role_add_fails: bool,
    lookup_fails: bool,
    responses: Mutex<VecDeque<OfferResponse>>,
    calls: Mutex<Vec<Call>>,
}

impl FakePlatform {
    fn new() -> Self {
        Self::default()
    }

    /// Adds a team role held by `members` existing members.
    fn with_team(mut self, role_id: u64, name: &str, members: u64) -> Self {
        self.roles.push(TeamRole::new(role_id, name));
        self.holders
            .get_mut()
            .unwrap()
            .insert(role_id, (1..=members).collect());
        self
    }

    fn with_dms_disabled(mut self) -> Self {
        self.dms_disabled = true;
        self
    }

    fn with_failing_role_add(mut self) -> Self {
        self.role_add_fails = true;
        self
    }

    fn with_failing_lookup(mut self) -> Self {
        self.lookup_fails = true;
        self
    }

    /// Scripts button presses, observed in order by the response window.
    fn with_responses(self, responses: &[OfferResponse]) -> Self {
        self.responses.lock().unwrap().extend(responses.iter().copied());
        self
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn count_calls(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn position(&self, matches: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls().iter().position(matches)
    }

    fn private_replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ReplyPrivate(content) => Some(content),
                _ => None,
            })
            .collect()
    }

    fn player_notices(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::NotifyPlayer { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    fn delivered_offers(&self) -> Vec<OfferMessage> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DeliverOffer { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn announcements(&self) -> Vec<SigningAnnouncement> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Announce(announcement) => Some(announcement),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SigningPlatform for FakePlatform {
    async fn find_team_role(&self, team: &str) -> Result<Option<TeamRole>, AppError> {
        self.record(Call::FindTeamRole(team.to_string()));

        if self.lookup_fails {
            return Err(AppError::IoErr(std::io::Error::other("gateway unavailable")));
        }

        Ok(self.roles.iter().find(|role| role.name == team).cloned())
    }

    async fn roster_count(&self, role: &TeamRole) -> Result<usize, AppError> {
        self.record(Call::RosterCount(role.role_id));

        Ok(self
            .holders
            .lock()
            .unwrap()
            .get(&role.role_id)
            .map_or(0, |members| members.len()))
    }

    async fn deliver_offer(
        &self,
        player: &UserRef,
        message: &OfferMessage,
    ) -> Result<Delivery, AppError> {
        if self.dms_disabled {
            return Err(AppError::IoErr(std::io::Error::other(
                "Cannot send messages to this user",
            )));
        }

        self.record(Call::DeliverOffer {
            player: player.id,
            message: message.clone(),
        });

        Ok(Delivery {
            dm_channel_id: DM_CHANNEL_ID,
            message_id: OFFER_MESSAGE_ID,
        })
    }

    async fn reply_private(&self, content: &str) -> Result<(), AppError> {
        self.record(Call::ReplyPrivate(content.to_string()));
        Ok(())
    }

    async fn await_response(
        &self,
        message_id: u64,
        player: &UserRef,
        timeout: Duration,
    ) -> Option<OfferResponse> {
        self.record(Call::AwaitResponse {
            message_id,
            player: player.id,
            timeout,
        });

        self.responses.lock().unwrap().pop_front()
    }

    async fn add_team_role(&self, player: &UserRef, role: &TeamRole) -> Result<(), AppError> {
        self.record(Call::AddTeamRole {
            player: player.id,
            role_id: role.role_id,
        });

        if self.role_add_fails {
            return Err(AppError::IoErr(std::io::Error::other("Missing Permissions")));
        }

        self.holders
            .lock()
            .unwrap()
            .entry(role.role_id)
            .or_default()
            .insert(player.id);

        Ok(())
    }

    async fn announce(&self, announcement: &SigningAnnouncement) -> Result<(), AppError> {
        self.record(Call::Announce(announcement.clone()));
        Ok(())
    }

    async fn notify_player(&self, dm_channel_id: u64, content: &str) -> Result<(), AppError> {
        self.record(Call::NotifyPlayer {
            dm_channel_id,
            content: content.to_string(),
        });
        Ok(())
    }
}

fn offer_for(team: &str) -> Offer {
    Offer::new(
        UserRef::new(PLAYER_ID, "rookie"),
        team,
        UserRef::new(SENDER_ID, "manager"),
        Utc::now(),
    )
}

fn vikings_platform(members: u64) -> FakePlatform {
    FakePlatform::new().with_team(VIKINGS_ROLE_ID, "Vikings", members)
}
