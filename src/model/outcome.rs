//! Results of self-assign requests and the replies rendered from them.

/// What happened to a single self-assign request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The target role was granted.
    Assigned,
    /// The target role was revoked.
    Removed,
    /// The target role could not be resolved.
    RoleNotFound,
    /// The target role carries elevated permissions; an incident was logged.
    Elevated,
    /// The member holds none of the required eligibility roles.
    Ineligible,
    /// The request token could not be parsed.
    InvalidArguments,
    /// A platform call failed while processing the request.
    Failed,
}

/// Result of one self-assign request, consumed once by the reply renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Human-readable description shown to the member.
    pub description: String,
    /// Color of the affected role for successful grants and revokes.
    pub role_color: Option<u32>,
}

impl Outcome {
    pub fn success(kind: OutcomeKind, description: impl Into<String>, role_color: u32) -> Self {
        Self {
            kind,
            description: description.into(),
            role_color: Some(role_color),
        }
    }

    pub fn failure(kind: OutcomeKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            role_color: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Assigned | OutcomeKind::Removed)
    }
}

/// Message sent back over an interaction's response channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain text content.
    Text(String),
    /// Result embed; `color` overrides the default success/failure color.
    Result {
        success: bool,
        description: String,
        color: Option<u32>,
    },
}

impl Reply {
    pub fn failure(description: impl Into<String>) -> Self {
        Self::Result {
            success: false,
            description: description.into(),
            color: None,
        }
    }
}

impl From<&Outcome> for Reply {
    fn from(outcome: &Outcome) -> Self {
        Self::Result {
            success: outcome.is_success(),
            description: outcome.description.clone(),
            color: outcome.role_color,
        }
    }
}
