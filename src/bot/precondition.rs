//! Route preconditions.
//!
//! Preconditions are checked against the invocation before a route's handler runs
//! and before the interaction is deferred, so a failed check is reported through the
//! primary response.

use serenity::all::Permissions;

use crate::{error::command::CommandError, model::CommandInvocation};

/// A requirement an invocation must meet before its handler may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The interaction must come from a guild and carry the invoking member.
    RequireGuild,
    /// The bot must hold the permissions in the channel the interaction came from.
    /// Administrator satisfies any requirement.
    RequireBotPermission(Permissions),
}

impl Precondition {
    /// Checks a single precondition.
    ///
    /// # Returns
    /// - `Ok(())` - The invocation meets the precondition
    /// - `Err(String)` - Reason shown to the user
    pub fn check(&self, invocation: &CommandInvocation) -> Result<(), String> {
        match self {
            Self::RequireGuild => {
                if invocation.guild.is_some() && invocation.member.is_some() {
                    Ok(())
                } else {
                    Err("Command must be used in a guild channel.".to_string())
                }
            }
            Self::RequireBotPermission(required) => {
                let granted = invocation.app_permissions.is_some_and(|permissions| {
                    permissions.administrator() || permissions.contains(*required)
                });

                if granted {
                    Ok(())
                } else {
                    Err(format!(
                        "Bot requires guild permission {}.",
                        required.get_permission_names().join(", ")
                    ))
                }
            }
        }
    }
}

/// Checks a precondition group, collecting every failure.
///
/// # Returns
/// - `Ok(())` - All preconditions hold
/// - `Err(CommandError::UnmetPrecondition)` - At least one precondition failed
pub fn check_all(
    preconditions: &[Precondition],
    invocation: &CommandInvocation,
) -> Result<(), CommandError> {
    let failures: Vec<String> = preconditions
        .iter()
        .filter_map(|precondition| precondition.check(invocation).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CommandError::unmet_preconditions(failures))
    }
}
