//! Role and roster helpers over Serenity models.

use serenity::all::{Member, Role, RoleId};

/// Finds the role whose name equals `name` exactly (case-sensitive).
///
/// # Arguments
/// - `roles` - Roles of the guild
/// - `name` - Team name to match
///
/// # Returns
/// - `Some(&Role)` - The first role with that exact name
/// - `None` - No role has that name
pub fn find_role_by_name<'a>(
    roles: impl IntoIterator<Item = &'a Role>,
    name: &str,
) -> Option<&'a Role> {
    roles.into_iter().find(|role| role.name == name)
}

/// Counts members holding `role_id`.
pub fn count_role_holders(members: &[Member], role_id: RoleId) -> usize {
    members
        .iter()
        .filter(|member| member.roles.contains(&role_id))
        .count()
}
