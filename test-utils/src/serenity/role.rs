//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values. All other
/// fields are set to reasonable defaults (not hoisted, not managed, not mentionable).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `permissions` - Raw Discord permission bits granted by the role
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
/// // Ordinary role without permissions
/// let role = create_test_role(123456789, "Member", 0x00FF00, 1, 0);
///
/// // Administrator role (bit 3)
/// let admin = create_test_role(987654321, "Admin", 0xFF0000, 10, 1 << 3);
/// ```
pub fn create_test_role(
    role_id: u64,
    name: &str,
    color: u32,
    position: i16,
    permissions: u64,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
