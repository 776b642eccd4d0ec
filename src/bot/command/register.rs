//! Slash command registration.
//!
//! Discord replaces the full command list of a scope on every registration call, so
//! modules are first grouped by the scope they belong to and each scope is then
//! registered once with the commands of all its modules.

use serenity::all::{Command, CreateCommand, GuildId};
use serenity::http::Http;
use std::collections::BTreeMap;

use crate::{bot::command::CommandModule, config::Config, error::AppError};

/// Where a set of slash commands is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationScope {
    Global,
    Guild(u64),
}

/// Groups command modules by registration scope.
///
/// A module listed in `GUILD_MODULES` is registered to its guild. Every other module
/// is registered globally. In debug builds with a debug guild configured, every
/// module is registered to the debug guild instead so changes show up immediately.
///
/// # Arguments
/// - `config` - Loaded configuration
/// - `debug` - Whether this is a debug build
pub fn plan_registration(
    config: &Config,
    debug: bool,
) -> BTreeMap<RegistrationScope, Vec<CommandModule>> {
    let debug_guild = config.discord_debug_guild_id.filter(|_| debug);
    let mut plan: BTreeMap<RegistrationScope, Vec<CommandModule>> = BTreeMap::new();

    for module in CommandModule::ALL {
        let scope = match (debug_guild, config.guild_modules.get(&module)) {
            (Some(debug_guild), _) => RegistrationScope::Guild(debug_guild),
            (None, Some(guild_id)) => RegistrationScope::Guild(*guild_id),
            (None, None) => RegistrationScope::Global,
        };
        plan.entry(scope).or_default().push(module);
    }

    plan
}

/// Registers slash commands for every module.
///
/// A scope whose registration fails is logged and skipped.
///
/// # Returns
/// - Description of each scope that was registered, for the startup audit entry
pub async fn register_commands(http: &Http, config: &Config) -> Vec<String> {
    let mut registered = Vec::new();

    for (scope, modules) in plan_registration(config, cfg!(debug_assertions)) {
        let commands: Vec<CreateCommand> = modules
            .iter()
            .flat_map(|module| module.slash_commands())
            .collect();
        let names = modules
            .iter()
            .map(|module| module.name())
            .collect::<Vec<_>>()
            .join(", ");

        match register_scope(http, scope, commands).await {
            Ok(count) => {
                tracing::info!("Registered {} commands of [{}] to {:?}", count, names, scope);
                registered.push(match scope {
                    RegistrationScope::Global => format!("[{}] globally", names),
                    RegistrationScope::Guild(guild_id) => {
                        format!("[{}] to guild {}", names, guild_id)
                    }
                });
            }
            Err(e) => {
                tracing::error!("Failed to register commands of [{}] to {:?}: {}", names, scope, e);
            }
        }
    }

    registered
}

async fn register_scope(
    http: &Http,
    scope: RegistrationScope,
    commands: Vec<CreateCommand>,
) -> Result<usize, AppError> {
    let registered = match scope {
        RegistrationScope::Global => Command::set_global_commands(http, commands).await?,
        RegistrationScope::Guild(guild_id) => {
            GuildId::new(guild_id).set_commands(http, commands).await?
        }
    };

    Ok(registered.len())
}
