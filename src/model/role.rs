//! Discord guild role domain model.
//!
//! Provides an immutable snapshot of a role as fetched from Discord for a single
//! request, tracking identity, display properties, and the permissions the role
//! grants. Snapshots are never cached; each interaction fetches fresh ones.

use serenity::all::{Mentionable, Permissions, Role, RoleId};

/// Snapshot of a Discord role within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name.
    pub name: String,
    /// Role color as a 24-bit RGB integer, zero when the role has no color.
    pub color: u32,
    /// Permissions granted to holders of the role.
    pub permissions: Permissions,
}

impl GuildRole {
    /// Converts a Serenity role into a domain snapshot at the repository boundary.
    ///
    /// # Arguments
    /// - `role` - The Serenity role returned by the Discord API
    ///
    /// # Returns
    /// - `GuildRole` - Snapshot holding the role's ID, name, color and permissions
    pub fn from_role(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            color: role.colour.0,
            permissions: role.permissions,
        }
    }

    /// Mention string that renders as the role's name in Discord messages.
    pub fn mention(&self) -> String {
        role_mention(self.role_id)
    }
}

/// Mention string for a role referenced only by ID.
pub fn role_mention(role_id: u64) -> String {
    RoleId::new(role_id).mention().to_string()
}
