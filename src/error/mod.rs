//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup code and by every call into
//! the Discord platform. Handler failures seen by users are classified separately as
//! `CommandError` (see `command`), which the interaction router produces at the
//! dispatch boundary from any `AppError` a handler returns.

pub mod command;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates every error that can surface from configuration loading, bot startup,
/// and Discord API calls. Most variants use `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating a bug or unexpected data shape.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
