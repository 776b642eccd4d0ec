//! Elevated role classification.
//!
//! A role is elevated when it grants any administrative or moderation permission.
//! Elevated roles are never eligible for self-service grants. The set below is a
//! security policy: changing it changes which roles members can hand themselves.

use serenity::all::Permissions;

use crate::model::GuildRole;

/// Permissions that make a role elevated.
pub const ELEVATED_PERMISSIONS: Permissions = Permissions::ADMINISTRATOR
    .union(Permissions::BAN_MEMBERS)
    .union(Permissions::KICK_MEMBERS)
    .union(Permissions::MANAGE_CHANNELS)
    .union(Permissions::MANAGE_GUILD)
    .union(Permissions::MANAGE_MESSAGES)
    .union(Permissions::MANAGE_ROLES)
    .union(Permissions::MANAGE_WEBHOOKS)
    .union(Permissions::MANAGE_NICKNAMES)
    .union(Permissions::MANAGE_GUILD_EXPRESSIONS)
    .union(Permissions::MANAGE_EVENTS)
    .union(Permissions::MENTION_EVERYONE)
    .union(Permissions::MODERATE_MEMBERS)
    .union(Permissions::MUTE_MEMBERS)
    .union(Permissions::DEAFEN_MEMBERS)
    .union(Permissions::VIEW_AUDIT_LOG)
    .union(Permissions::VIEW_GUILD_INSIGHTS)
    .union(Permissions::VIEW_CREATOR_MONETIZATION_ANALYTICS)
    .union(Permissions::CREATE_EVENTS);

/// Whether a permission set contains any elevated permission.
pub fn has_elevated_permission(permissions: Permissions) -> bool {
    permissions.intersects(ELEVATED_PERMISSIONS)
}

/// Whether a role is elevated and therefore ineligible for self-assign.
pub fn is_elevated(role: &GuildRole) -> bool {
    has_elevated_permission(role.permissions)
}
