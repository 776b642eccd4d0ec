//! Structured audit entries forwarded to the audit sink.

use chrono::{DateTime, Utc};

use crate::model::member::GuildMember;

/// Severity of an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    /// Security incident requiring attention, e.g. an attempt to self-assign an elevated role.
    Critical,
}

/// User an audit entry is attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditUser {
    pub user_id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<&GuildMember> for AuditUser {
    fn from(member: &GuildMember) -> Self {
        Self {
            user_id: member.user_id,
            name: member.display_name.clone(),
            avatar_url: None,
        }
    }
}

/// A single audit log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub severity: Severity,
    /// Label of the component that produced the entry.
    pub source: String,
    pub message: String,
    pub user: Option<AuditUser>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(severity: Severity, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            source: source.into(),
            message: message.into(),
            user: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_user(mut self, user: impl Into<AuditUser>) -> Self {
        self.user = Some(user.into());
        self
    }
}
