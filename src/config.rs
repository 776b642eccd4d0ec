use std::collections::HashMap;

use crate::{
    bot::command::CommandModule,
    error::{config::ConfigError, AppError},
    util::parse::parse_discord_id,
};

const DEFAULT_ACTIVITY: &str = "I'm alive!";

pub struct Config {
    pub discord_bot_token: String,
    /// Audit webhook; audit entries only go to the log when unset.
    pub discord_webhook_url: Option<String>,
    /// Guild every command is registered to in debug builds.
    pub discord_debug_guild_id: Option<u64>,
    pub discord_bot_activity: String,
    /// Modules restricted to a single guild.
    pub guild_modules: HashMap<CommandModule, u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_debug_guild_id = var("DISCORD_DEBUG_GUILD_ID")
            .map(|value| {
                parse_discord_id(&value).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DISCORD_DEBUG_GUILD_ID".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let guild_modules = match var("GUILD_MODULES") {
            Some(value) => parse_guild_modules(&value)?,
            None => HashMap::new(),
        };

        Ok(Self {
            discord_bot_token: var("DISCORD_BOT_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_webhook_url: var("DISCORD_WEBHOOK_URL"),
            discord_debug_guild_id,
            discord_bot_activity: var("DISCORD_BOT_ACTIVITY")
                .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string()),
            guild_modules,
        })
    }
}

/// Parses `GUILD_MODULES`, a comma-separated list of `module:guild_id` pairs.
///
/// # Returns
/// - `Ok(HashMap)` - Guild ID per restricted module
/// - `Err(ConfigError::InvalidEnvVar)` - A pair is malformed, names an unknown module,
///   or has an invalid guild ID
pub fn parse_guild_modules(value: &str) -> Result<HashMap<CommandModule, u64>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "GUILD_MODULES".to_string(),
        value: value.to_string(),
        reason,
    };

    let mut modules = HashMap::new();

    for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (name, guild_id) = pair
            .split_once(':')
            .ok_or_else(|| invalid(format!("expected module:guild_id, got '{}'", pair)))?;

        let module = CommandModule::from_name(name.trim())
            .ok_or_else(|| invalid(format!("unknown module '{}'", name.trim())))?;
        let guild_id = parse_discord_id(guild_id).map_err(|e| invalid(e.to_string()))?;

        modules.insert(module, guild_id);
    }

    Ok(modules)
}
