//! Outcome reporting for dispatched interactions.
//!
//! After the router returns, `OutcomeReporter::report` renders a failure to the
//! user when the dispatch failed and writes exactly one audit entry summarizing the
//! invocation. Handlers send their own replies through `deliver`, which picks the
//! primary response or the follow-up channel from the invocation's `ResponseState`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    bot::responder::InteractionResponder,
    error::{command::CommandError, AppError},
    model::{AuditEntry, CommandInvocation, Outcome, OutcomeKind, Reply, ResponseState, Severity},
    service::audit::AuditSink,
};

/// Source label attached to invocation summary entries.
pub const AUDIT_SOURCE: &str = "CommandHandler";

/// Process-wide count of dispatched commands, starting at zero on startup.
#[derive(Debug, Default)]
pub struct InvocationCounter(AtomicU64);

impl InvocationCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn commands_run(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Sends a reply over whichever channel the invocation has left.
///
/// Uses the primary response while the invocation has not been responded to and
/// the follow-up channel afterwards, marking the invocation as responded.
pub async fn deliver(
    invocation: &mut CommandInvocation,
    responder: &dyn InteractionResponder,
    reply: &Reply,
) -> Result<(), AppError> {
    match invocation.response_state {
        ResponseState::NotResponded => {
            responder.respond(reply).await?;
            invocation.response_state = ResponseState::Responded;
        }
        ResponseState::Responded => responder.follow_up(reply).await?,
    }

    Ok(())
}

pub struct OutcomeReporter<'a> {
    audit: &'a dyn AuditSink,
    counter: &'a InvocationCounter,
}

impl<'a> OutcomeReporter<'a> {
    /// Creates a new reporter.
    ///
    /// # Arguments
    /// - `audit` - Sink receiving the per-invocation summary entry
    /// - `counter` - Counter bumped for every invocation that matched a route
    pub fn new(audit: &'a dyn AuditSink, counter: &'a InvocationCounter) -> Self {
        Self { audit, counter }
    }

    /// Reports the result of one dispatched interaction.
    ///
    /// On failure the classified error is rendered to the user. A dispatch that
    /// returned outcomes is successful unless one of them is `OutcomeKind::Failed`;
    /// those failures were already shown to the user by the handler. Delivery errors
    /// are logged and do not prevent the audit entry from being written.
    ///
    /// # Arguments
    /// - `invocation` - The dispatched invocation
    /// - `responder` - Response channel of the interaction
    /// - `result` - What the router returned
    pub async fn report(
        &self,
        invocation: &mut CommandInvocation,
        responder: &dyn InteractionResponder,
        result: &Result<Vec<Outcome>, CommandError>,
    ) {
        if !matches!(result, Err(CommandError::UnknownCommand(_))) {
            self.counter.increment();
            tracing::debug!("{} commands run since startup", self.counter.commands_run());
        }

        let success = match result {
            Ok(outcomes) => !outcomes.iter().any(|outcome| outcome.kind == OutcomeKind::Failed),
            Err(error) => {
                tracing::debug!("Command `{}` failed: {}", invocation.identifier, error);

                let reply = Reply::failure(error.describe());
                if let Err(e) = deliver(invocation, responder, &reply).await {
                    tracing::error!(
                        "Failed to report error of command `{}`: {}",
                        invocation.identifier,
                        e
                    );
                }
                false
            }
        };

        let (severity, status) = if success {
            (Severity::Info, "successfully")
        } else {
            (Severity::Warning, "with error")
        };

        let message = format!(
            "{} executed command `{}` in guild `{}` {}",
            invocation.user.mention(),
            invocation.identifier,
            invocation.guild_name(),
            status
        );

        self.audit
            .log(AuditEntry::new(severity, AUDIT_SOURCE, message).with_user(&invocation.user))
            .await;
    }
}
