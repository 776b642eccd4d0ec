//! Self-assign request token.
//!
//! Self-assign buttons and select-menu entries carry a token of the form
//! `target;source;source...`: the first segment is the role to toggle and every
//! further segment is an eligibility role, any one of which the member must hold
//! to be granted the target. Empty segments are ignored, so `"111;"` and `"111"`
//! are the same request.

use crate::{error::command::CommandError, util::parse::parse_discord_id};

/// Delimiter between role IDs inside a self-assign token.
pub const TOKEN_DELIMITER: char = ';';

/// A parsed self-assign token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfAssignRequest {
    /// Role the member wants to toggle.
    pub target_role_id: u64,
    /// Roles of which the member must hold at least one; empty means no prerequisite.
    pub source_role_ids: Vec<u64>,
}

impl SelfAssignRequest {
    /// Parses a self-assign token.
    ///
    /// # Arguments
    /// - `token` - Semicolon-delimited role IDs, target first
    ///
    /// # Returns
    /// - `Ok(SelfAssignRequest)` - Target and eligibility roles in token order
    /// - `Err(CommandError::BadArgs)` - Token is empty or a segment is not a non-zero u64
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        let mut role_ids = token
            .split(TOKEN_DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| {
                parse_discord_id(segment).map_err(|e| CommandError::BadArgs(e.to_string()))
            });

        let target_role_id = role_ids
            .next()
            .ok_or_else(|| CommandError::BadArgs(format!("Empty self-assign token '{}'", token)))??;

        let source_role_ids = role_ids.collect::<Result<Vec<u64>, CommandError>>()?;

        Ok(Self {
            target_role_id,
            source_role_ids,
        })
    }
}
