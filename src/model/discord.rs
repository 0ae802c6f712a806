//! Discord user references shared by the command and offer models.

use serenity::all::User;

/// Minimal reference to a Discord user.
///
/// Carries the id used for filtering, role mutation and mentions, plus the tag shown in
/// private replies to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    /// Discord user ID as a u64.
    pub id: u64,
    /// Display tag, the bare username for migrated accounts or `name#1234` otherwise.
    pub tag: String,
}

impl UserRef {
    pub fn new(id: u64, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
        }
    }

    /// Mention markup that renders as a clickable user in Discord messages.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self::new(user.id.get(), user.tag())
    }
}
