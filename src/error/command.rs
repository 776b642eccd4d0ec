//! Failure classification for dispatched interactions.
//!
//! Every interaction that does not complete successfully ends up as exactly one
//! `CommandError`. The outcome reporter turns it into the failure embed shown to
//! the user and into a warning-level audit entry.

use thiserror::Error;

use crate::error::AppError;

/// Reason a dispatched command did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// One or more route preconditions failed before the handler ran.
    ///
    /// `nested` holds the individual reasons when a whole precondition group failed.
    #[error("Unmet precondition: {reason}")]
    UnmetPrecondition { reason: String, nested: Vec<String> },

    /// No registered route matches the interaction identifier.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Parameters could not be decoded for the matched route.
    #[error("Invalid arguments: {0}")]
    BadArgs(String),

    /// A platform or internal call failed while the handler was running.
    #[error("Command exception: {0}")]
    Exception(String),

    /// The handler ran but could not do its work with the data it was given.
    #[error("Command could not be executed")]
    Unsuccessful,

    /// Any failure that fits none of the other classes.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl CommandError {
    /// Builds the error for a failed precondition group.
    ///
    /// A single failure is reported on its own; several failures are reported under
    /// a summary reason with each individual reason nested below it.
    pub fn unmet_preconditions(mut reasons: Vec<String>) -> Self {
        if reasons.len() == 1 {
            Self::UnmetPrecondition {
                reason: reasons.remove(0),
                nested: Vec::new(),
            }
        } else {
            Self::UnmetPrecondition {
                reason: "Multiple preconditions failed".to_string(),
                nested: reasons,
            }
        }
    }

    /// User-facing description rendered into the failure response.
    pub fn describe(&self) -> String {
        match self {
            Self::UnmetPrecondition { reason, nested } => {
                let mut description = format!("Unmet Precondition: {}", reason);
                for nested_reason in nested {
                    description.push('\n');
                    description.push_str(nested_reason);
                }
                description
            }
            Self::UnknownCommand(_) => "Unknown command".to_string(),
            Self::BadArgs(_) => "Invalid number or arguments".to_string(),
            Self::Exception(reason) => format!("Command exception: {}", reason),
            Self::Unsuccessful => "Command could not be executed".to_string(),
            Self::Unknown(reason) => format!("Unknown Error:\n{}", reason),
        }
    }
}

/// Classifies collaborator failures caught at the dispatch boundary.
///
/// Discord API and internal errors are handler exceptions; anything else is
/// reported as an unknown error.
impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::DiscordErr(_) | AppError::InternalErr(_) => Self::Exception(err.to_string()),
            err => Self::Unknown(err.to_string()),
        }
    }
}
