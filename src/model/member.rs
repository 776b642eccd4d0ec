//! Guild member domain model.
//!
//! A member is the invoking user as seen inside one guild, including the roles
//! they hold. The role set is a snapshot taken from the interaction payload and is
//! updated locally after each grant or revoke issued during the same invocation.

use serenity::all::{Member, Mentionable, UserId};
use std::collections::HashSet;

/// Snapshot of a guild member and the roles they currently hold.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Guild nickname if set, otherwise the global display name or username.
    pub display_name: String,
    /// IDs of the roles the member holds in the guild.
    pub role_ids: HashSet<u64>,
}

impl GuildMember {
    /// Converts the Serenity member attached to an interaction into a snapshot.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            display_name: member.display_name().to_string(),
            role_ids: member.roles.iter().map(|role_id| role_id.get()).collect(),
        }
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }

    /// Whether the member holds at least one of `role_ids`.
    pub fn has_any_role<'a>(&self, mut role_ids: impl Iterator<Item = &'a u64>) -> bool {
        role_ids.any(|role_id| self.has_role(*role_id))
    }

    pub fn mention(&self) -> String {
        user_mention(self.user_id)
    }
}

/// Mention string for a user referenced only by ID.
pub fn user_mention(user_id: u64) -> String {
    UserId::new(user_id).mention().to_string()
}
