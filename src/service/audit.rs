//! Audit log delivery.
//!
//! Every audit entry is written to the tracing log. When a Discord webhook is
//! configured the entry is also posted there as an embed, giving moderators a
//! channel that records who changed which role and any elevated-role incidents.
//!
//! Delivery is best effort: a failed webhook post is logged and dropped so that an
//! audit outage never fails the command that produced the entry.
//!
//! Events logged here use `AUDIT_TARGET`, which the log forwarder skips so audit
//! entries are not posted twice and delivery failures do not loop back.

use serenity::all::{ExecuteWebhook, Webhook};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::embed::audit_embed,
    error::AppError,
    model::{AuditEntry, Severity},
};

/// Tracing target of audit entries and of audit delivery failures.
pub const AUDIT_TARGET: &str = "selfassign_bot::audit";

/// Receives structured audit entries.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn log(&self, entry: AuditEntry);
}

/// Audit sink writing to tracing and, optionally, to a Discord webhook.
pub struct WebhookAuditSink {
    http: Arc<Http>,
    webhook: Option<Webhook>,
}

impl WebhookAuditSink {
    /// Creates the sink, resolving the webhook when a URL is configured.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used to resolve and execute the webhook
    /// - `webhook_url` - Optional webhook URL; `None` logs to tracing only
    ///
    /// # Returns
    /// - `Ok(WebhookAuditSink)` - Sink ready for use
    /// - `Err(AppError::DiscordErr)` - The webhook URL is invalid or could not be resolved
    pub async fn new(http: Arc<Http>, webhook_url: Option<&str>) -> Result<Self, AppError> {
        let webhook = match webhook_url {
            Some(url) => Some(Webhook::from_url(&http, url).await?),
            None => {
                tracing::warn!("No audit webhook configured, audit entries go to the log only");
                None
            }
        };

        Ok(Self { http, webhook })
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook.is_some()
    }

    /// Posts an entry to the webhook without tracing it, logging any failure.
    pub async fn deliver(&self, entry: &AuditEntry) {
        let Some(webhook) = &self.webhook else {
            return;
        };

        if let Err(e) = self.post(webhook, entry).await {
            tracing::error!(
                target: AUDIT_TARGET,
                "Failed to deliver audit entry from {}: {}",
                entry.source,
                e
            );
        }
    }

    async fn post(&self, webhook: &Webhook, entry: &AuditEntry) -> Result<(), AppError> {
        let builder = ExecuteWebhook::new().embed(audit_embed(entry)?);
        webhook.execute(&self.http, false, builder).await?;

        Ok(())
    }
}

#[async_trait]
impl AuditSink for WebhookAuditSink {
    async fn log(&self, entry: AuditEntry) {
        trace_entry(&entry);
        self.deliver(&entry).await;
    }
}

/// Writes an audit entry to the tracing log at the level matching its severity.
pub fn trace_entry(entry: &AuditEntry) {
    let user_id = entry.user.as_ref().map(|user| user.user_id);

    match entry.severity {
        Severity::Critical => tracing::error!(
            target: AUDIT_TARGET,
            source = %entry.source,
            ?user_id,
            "{}",
            entry.message
        ),
        Severity::Warning => tracing::warn!(
            target: AUDIT_TARGET,
            source = %entry.source,
            ?user_id,
            "{}",
            entry.message
        ),
        Severity::Info => tracing::info!(
            target: AUDIT_TARGET,
            source = %entry.source,
            ?user_id,
            "{}",
            entry.message
        ),
    }
}
