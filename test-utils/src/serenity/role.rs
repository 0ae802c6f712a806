//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role belonging to a guild.
///
/// Team roles only matter by id and exact name, so every other field is set to a
/// plain default (no colour, not hoisted, not managed, zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `guild_id` - Discord guild ID the role belongs to
/// - `name` - Role name, matched exactly against team names
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, 999, "Vikings");
/// assert_eq!(role.name, "Vikings");
/// ```
pub fn create_test_role(role_id: u64, guild_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
