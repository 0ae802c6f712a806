//! Offer domain models.
//!
//! An offer is created per `sign` invocation and lives only as long as its lifecycle task.
//! Nothing here is persisted.

use chrono::{DateTime, Duration, Utc};
use std::sync::OnceLock;

use crate::model::discord::UserRef;

/// How long a player has to answer an offer.
pub const OFFER_DURATION_HOURS: i64 = 4;

/// Custom id of the accept button.
pub const ACCEPT_CUSTOM_ID: &str = "accept";
/// Custom id of the decline button.
pub const DECLINE_CUSTOM_ID: &str = "decline";

/// A time-bounded proposal for a player to join a team.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Player the offer is sent to; the only user allowed to answer it.
    pub player: UserRef,
    /// Team name as chosen in the command.
    pub team: String,
    /// User who invoked `sign`.
    pub sender: UserRef,
    pub created_at: DateTime<Utc>,
    /// Always `created_at` plus `OFFER_DURATION_HOURS`.
    pub expires_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(
        player: UserRef,
        team: impl Into<String>,
        sender: UserRef,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            player,
            team: team.into(),
            sender,
            created_at,
            expires_at: created_at + Duration::hours(OFFER_DURATION_HOURS),
        }
    }

    /// Time left until expiration as seen at `now`, clamped to zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.expires_at - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}

/// One of the two answers a player can give to an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferResponse {
    Accept,
    Decline,
}

impl OfferResponse {
    /// Maps a button custom id to a response, `None` for anything else.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            ACCEPT_CUSTOM_ID => Some(Self::Accept),
            DECLINE_CUSTOM_ID => Some(Self::Decline),
            _ => None,
        }
    }

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::Accept => ACCEPT_CUSTOM_ID,
            Self::Decline => DECLINE_CUSTOM_ID,
        }
    }
}

/// Resolution of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    Pending,
    Accepted,
    Declined,
    Expired,
}

/// Write-once holder for an offer's outcome.
///
/// The first call to `resolve` wins; later calls are no-ops and report that nothing changed.
#[derive(Debug, Default)]
pub struct OutcomeCell {
    outcome: OnceLock<OfferOutcome>,
}

impl OutcomeCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the terminal outcome if none has been recorded yet.
    ///
    /// # Arguments
    /// - `outcome` - Terminal outcome to record, `Pending` is ignored
    ///
    /// # Returns
    /// - `true` - The outcome was recorded by this call
    /// - `false` - An outcome was already recorded, or `outcome` was `Pending`
    pub fn resolve(&self, outcome: OfferOutcome) -> bool {
        if outcome == OfferOutcome::Pending {
            return false;
        }

        self.outcome.set(outcome).is_ok()
    }

    pub fn get(&self) -> OfferOutcome {
        self.outcome.get().copied().unwrap_or(OfferOutcome::Pending)
    }
}
