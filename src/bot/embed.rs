//! Discord embed builders.
//!
//! Shared by the interaction responder, for replies to members, and by the audit
//! sink, for entries posted to the audit webhook, so both render consistently.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{AuditEntry, InvokingUser, Severity},
};

pub const COLOR_SUCCESS: u32 = 0x2ECC71;
pub const COLOR_FAILURE: u32 = 0xE74C3C;
pub const COLOR_CRITICAL: u32 = 0x992D22;
pub const COLOR_WARNING: u32 = 0xE67E22;
pub const COLOR_INFO: u32 = 0x3498DB;

/// Converts a UTC time into Discord's timestamp type.
///
/// # Returns
/// - `Ok(Timestamp)` - Timestamp usable in embeds
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Time is out of Discord's range
pub fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Builds the embed for a command result.
///
/// Successful results are green and failures red unless `color` overrides it, as it
/// does for role grants which use the role's own color. A role without a color
/// reports zero and keeps the default.
///
/// # Arguments
/// - `success` - Whether the result describes a success
/// - `description` - Text shown in the embed body
/// - `color` - Optional color override
/// - `user` - Invoking user shown as the embed author
pub fn result_embed(
    success: bool,
    description: &str,
    color: Option<u32>,
    user: &InvokingUser,
) -> Result<CreateEmbed, AppError> {
    let default_color = if success { COLOR_SUCCESS } else { COLOR_FAILURE };
    let color = color.filter(|c| *c != 0).unwrap_or(default_color);

    Ok(CreateEmbed::new()
        .description(description)
        .color(color)
        .author(author(&user.name, user.avatar_url.as_deref()))
        .timestamp(discord_timestamp(Utc::now())?))
}

/// Builds the embed posted to the audit webhook for one entry.
pub fn audit_embed(entry: &AuditEntry) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title(&entry.source)
        .description(&entry.message)
        .color(severity_color(entry.severity))
        .timestamp(discord_timestamp(entry.timestamp)?);

    if let Some(user) = &entry.user {
        embed = embed.author(author(&user.name, user.avatar_url.as_deref()));
    }

    Ok(embed)
}

pub fn severity_color(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => COLOR_CRITICAL,
        Severity::Warning => COLOR_WARNING,
        Severity::Info => COLOR_INFO,
    }
}

fn author(name: &str, icon_url: Option<&str>) -> CreateEmbedAuthor {
    let author = CreateEmbedAuthor::new(name);
    match icon_url {
        Some(url) => author.icon_url(url),
        None => author,
    }
}
