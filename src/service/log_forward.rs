//! Forwarding of warnings and errors to the audit webhook.
//!
//! `LogForwardLayer` is a `tracing_subscriber` layer that turns every warn or error
//! event, from this crate or from serenity, into an audit entry and queues it on a
//! bounded channel. The subscriber is installed before the audit sink exists, so
//! entries wait in the queue until `forward_logs` starts draining it.
//!
//! Events are dropped when the queue is full or when no webhook is configured and
//! nothing drains the queue.

use std::{fmt, sync::Arc};
use tokio::sync::mpsc;
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::layer::{Context, Layer};

use crate::{
    model::{AuditEntry, Severity},
    service::audit::{WebhookAuditSink, AUDIT_TARGET},
};

const LOG_BUFFER_SIZE: usize = 256;

/// Layer queueing warn and error events for the audit webhook.
pub struct LogForwardLayer {
    sender: mpsc::Sender<AuditEntry>,
}

/// Receiving end of the forwarded events.
pub struct LogReceiver {
    inner: mpsc::Receiver<AuditEntry>,
}

/// Creates the layer and the receiver `forward_logs` drains.
pub fn channel() -> (LogForwardLayer, LogReceiver) {
    let (sender, inner) = mpsc::channel(LOG_BUFFER_SIZE);
    (LogForwardLayer { sender }, LogReceiver { inner })
}

impl<S: Subscriber> Layer<S> for LogForwardLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Some(entry) = forwarded_entry(event) {
            // A full or closed queue drops the event; logging it would re-enter this layer.
            let _ = self.sender.try_send(entry);
        }
    }
}

/// Posts forwarded events to the audit webhook until every layer is dropped.
pub async fn forward_logs(mut receiver: LogReceiver, sink: Arc<WebhookAuditSink>) {
    while let Some(entry) = receiver.inner.recv().await {
        sink.deliver(&entry).await;
    }
}

/// Converts an event into an audit entry attributed to its target.
///
/// # Returns
/// - `Some(AuditEntry)` - Warning for warn events, critical for error events
/// - `None` - The event is below warn or was produced by the audit sink itself
fn forwarded_entry(event: &Event<'_>) -> Option<AuditEntry> {
    let metadata = event.metadata();
    if metadata.target() == AUDIT_TARGET {
        return None;
    }

    let severity = match *metadata.level() {
        Level::ERROR => Severity::Critical,
        Level::WARN => Severity::Warning,
        _ => return None,
    };

    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);

    Some(AuditEntry::new(severity, metadata.target(), visitor.into_message()))
}

/// Collects the message of an event followed by its other fields.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} ({})", self.message, self.fields.join(", "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
