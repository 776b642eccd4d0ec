//! Self-assign component handlers.
//!
//! Buttons carry a single self-assign token in their custom ID. Select menus carry
//! one token per selected entry; entries are processed one at a time so each sees
//! the role changes made by the ones before it.

use crate::{
    bot::{reporter::deliver, router::DispatchContext},
    error::command::CommandError,
    model::{CommandInvocation, GuildMember, Outcome, OutcomeKind, Reply, SelfAssignRequest},
    service::SelfAssignService,
};

/// Handles a self-assign button press.
///
/// # Returns
/// - `Ok(Outcome)` - The request was decided and the result shown to the member
/// - `Err(CommandError)` - The invocation has no guild member or a Discord call failed
pub async fn button(
    invocation: &mut CommandInvocation,
    ctx: &DispatchContext<'_>,
    request: &SelfAssignRequest,
) -> Result<Outcome, CommandError> {
    let (guild_id, mut member) = requester(invocation)?;

    let outcome = SelfAssignService::new(ctx.roles, ctx.audit)
        .assign(guild_id, &mut member, request)
        .await?;
    invocation.member = Some(member);

    deliver(invocation, ctx.responder, &Reply::from(&outcome)).await?;

    Ok(outcome)
}

/// Handles a self-assign select menu submission.
///
/// Each entry gets its own reply. An entry that cannot be parsed or whose Discord
/// calls fail is reported as a failure for that entry only, and the remaining
/// entries are still processed. The menu's selection is reset afterwards; a failed
/// reset is logged and otherwise ignored.
///
/// # Returns
/// - `Ok(Vec<Outcome>)` - One outcome per entry, in submission order
/// - `Err(CommandError)` - The invocation has no guild member, or the first reply that
///   could not be sent
pub async fn select(
    invocation: &mut CommandInvocation,
    ctx: &DispatchContext<'_>,
    entries: &[String],
) -> Result<Vec<Outcome>, CommandError> {
    let (guild_id, mut member) = requester(invocation)?;
    let service = SelfAssignService::new(ctx.roles, ctx.audit);
    let mut outcomes = Vec::with_capacity(entries.len());
    let mut delivery_error = None;

    for entry in entries {
        let outcome = match SelfAssignRequest::parse(entry) {
            Ok(request) => match service.assign(guild_id, &mut member, &request).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Self-assign entry '{}' failed: {}", entry, e);
                    Outcome::failure(OutcomeKind::Failed, CommandError::from(e).describe())
                }
            },
            Err(e) => Outcome::failure(OutcomeKind::InvalidArguments, e.describe()),
        };

        if let Err(e) = deliver(invocation, ctx.responder, &Reply::from(&outcome)).await {
            tracing::warn!("Failed to reply to self-assign entry '{}': {}", entry, e);
            delivery_error.get_or_insert(e);
        }
        outcomes.push(outcome);
    }

    invocation.member = Some(member);

    if let Err(e) = ctx.responder.reset_components().await {
        tracing::warn!(
            "Failed to reset self-assign menu `{}`: {}",
            invocation.identifier,
            e
        );
    }

    match delivery_error {
        Some(e) => Err(e.into()),
        None => Ok(outcomes),
    }
}

/// Guild and member snapshot of the invoking user.
fn requester(invocation: &CommandInvocation) -> Result<(u64, GuildMember), CommandError> {
    match (&invocation.guild, &invocation.member) {
        (Some(guild), Some(member)) => Ok((guild.guild_id, member.clone())),
        _ => {
            tracing::warn!(
                "`{}` reached a self-assign handler without a guild member",
                invocation.identifier
            );
            Err(CommandError::Unsuccessful)
        }
    }
}
