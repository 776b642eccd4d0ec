use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake ID from a string segment
///
/// Surrounding whitespace is ignored. Zero is rejected since serenity IDs are
/// non-zero and constructing one from zero panics.
///
/// # Arguments
/// - `value` - The string to attempt to parse into a Discord ID
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed, non-zero ID
/// - `Err(AppError::InternalErr(ParseStringId))` - Not an unsigned 64-bit integer
/// - `Err(AppError::InternalErr(ZeroId))` - Parsed as zero
pub fn parse_discord_id(value: &str) -> Result<u64, AppError> {
    let trimmed = value.trim();
    let id = trimmed
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: trimmed.to_string(),
            source: e,
        })?;

    if id == 0 {
        return Err(InternalError::ZeroId.into());
    }

    Ok(id)
}
