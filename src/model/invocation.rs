//! Per-interaction invocation state.
//!
//! A `CommandInvocation` is created when an interaction arrives, threaded through
//! routing, handling and reporting, and dropped once the outcome is reported.

use serenity::all::Permissions;

use crate::model::{audit::AuditUser, member::GuildMember};

/// Decoded payload of an inbound interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionData {
    /// Slash command invocation.
    SlashCommand,
    /// Button press; the parameters live in the custom ID.
    Button,
    /// Select-menu submission carrying the selected entry values.
    SelectMenu { values: Vec<String> },
}

/// Whether the primary response of an interaction has been used.
///
/// An interaction's primary response is single-use. Once deferred or responded to,
/// every further message must go through the follow-up channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseState {
    #[default]
    NotResponded,
    Responded,
}

/// User who triggered the interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokingUser {
    pub user_id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl InvokingUser {
    pub fn mention(&self) -> String {
        crate::model::member::user_mention(self.user_id)
    }
}

impl From<&InvokingUser> for AuditUser {
    fn from(user: &InvokingUser) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Guild the interaction originated from.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationGuild {
    pub guild_id: u64,
    /// Guild name from the cache, falling back to the ID when not cached.
    pub name: String,
}

/// A single dispatched interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    /// Command name or component custom ID.
    pub identifier: String,
    pub data: InteractionData,
    pub user: InvokingUser,
    pub guild: Option<InvocationGuild>,
    /// The invoking user as a guild member; present only for guild interactions.
    pub member: Option<GuildMember>,
    /// Permissions the bot holds in the originating channel.
    pub app_permissions: Option<Permissions>,
    pub response_state: ResponseState,
}

impl CommandInvocation {
    pub fn new(identifier: impl Into<String>, data: InteractionData, user: InvokingUser) -> Self {
        Self {
            identifier: identifier.into(),
            data,
            user,
            guild: None,
            member: None,
            app_permissions: None,
            response_state: ResponseState::NotResponded,
        }
    }

    pub fn in_guild(mut self, guild: InvocationGuild, member: Option<GuildMember>) -> Self {
        self.guild = Some(guild);
        self.member = member;
        self
    }

    pub fn with_app_permissions(mut self, permissions: Permissions) -> Self {
        self.app_permissions = Some(permissions);
        self
    }

    /// Guild name for log lines, `direct message` outside guilds.
    pub fn guild_name(&self) -> &str {
        self.guild
            .as_ref()
            .map(|guild| guild.name.as_str())
            .unwrap_or("direct message")
    }
}
