//! Team registry and team role models.
//!
//! Teams are not stored anywhere by the bot. A team exists when the guild has a role whose name
//! matches a registry entry exactly, and its roster is whoever currently holds that role.

use serenity::all::Role;

/// Teams players can be signed to, in the order they are offered as command choices.
pub const TEAM_NAMES: [&str; 6] = ["Vikings", "Bears", "Aces", "Tigers", "Spartans", "Mariners"];

/// Maximum roster size shown as the denominator of roster occupancy.
pub const ROSTER_CAP: usize = 20;

/// Returns whether `name` is one of the registered teams.
pub fn is_registered_team(name: &str) -> bool {
    TEAM_NAMES.contains(&name)
}

/// Guild role standing in for a team's membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role name, equal to the team name.
    pub name: String,
}

impl TeamRole {
    pub fn new(role_id: u64, name: impl Into<String>) -> Self {
        Self {
            role_id,
            name: name.into(),
        }
    }
}

impl From<&Role> for TeamRole {
    fn from(role: &Role) -> Self {
        Self::new(role.id.get(), role.name.clone())
    }
}

/// A team role together with its roster occupancy at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTeam {
    pub role: TeamRole,
    pub roster: usize,
}

/// Formats roster occupancy as `current/cap`.
pub fn roster_display(count: usize) -> String {
    format!("{}/{}", count, ROSTER_CAP)
}
