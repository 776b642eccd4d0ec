//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Sets the bot's
//! status, registers slash commands, and records the startup in the audit log.

use serenity::all::{ActivityData, Context, Ready};

use crate::{
    bot::command::register::register_commands,
    config::Config,
    model::{AuditEntry, Severity},
    service::audit::AuditSink,
};

const AUDIT_SOURCE: &str = "Startup";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Configuration holding the activity text and registration settings
/// - `audit` - Sink receiving the startup entry
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, audit: &dyn AuditSink, ctx: Context, ready: Ready) {
    ctx.set_activity(Some(ActivityData::custom(config.discord_bot_activity.clone())));

    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    // Guild names are only known once the guild has been cached.
    let guilds: Vec<String> = ready
        .guilds
        .iter()
        .map(|guild| {
            ctx.cache
                .guild(guild.id)
                .map(|cached| cached.name.clone())
                .unwrap_or_else(|| guild.id.to_string())
        })
        .collect();

    let registered = register_commands(&ctx.http, config).await;

    audit
        .log(AuditEntry::new(
            Severity::Info,
            AUDIT_SOURCE,
            ready_message(
                &ready.user.name,
                &config.discord_bot_activity,
                &guilds,
                &registered,
            ),
        ))
        .await;
}

/// Startup summary naming the connected guilds, the activity and the registered commands.
fn ready_message(
    bot_name: &str,
    activity: &str,
    guilds: &[String],
    registered: &[String],
) -> String {
    let guilds = if guilds.is_empty() {
        "no guilds".to_string()
    } else {
        guilds.join(", ")
    };
    let registered = if registered.is_empty() {
        "no commands".to_string()
    } else {
        registered.join("; ")
    };

    format!(
        "{} is ready in {}, activity set to \"{}\", registered {}",
        bot_name, guilds, activity, registered
    )
}
