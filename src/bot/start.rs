use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    service::{
        audit::WebhookAuditSink,
        log_forward::{forward_logs, LogReceiver},
    },
};

/// Builds the Discord client and its event handler.
///
/// Resolves the audit webhook up front so a bad webhook URL fails startup instead
/// of the first audit entry. With a webhook configured, forwarded log events start
/// draining to it here.
///
/// # Arguments
/// - `config` - Application configuration
/// - `log_receiver` - Warn and error events queued since the subscriber was installed
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The audit webhook or the client could not be set up
pub async fn init_bot(config: Arc<Config>, log_receiver: LogReceiver) -> Result<Client, AppError> {
    // Interactions arrive without privileged intents; GUILDS keeps the guild cache filled
    let intents = GatewayIntents::GUILDS;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let audit =
        Arc::new(WebhookAuditSink::new(http, config.discord_webhook_url.as_deref()).await?);
    if audit.has_webhook() {
        tokio::spawn(forward_logs(log_receiver, audit.clone()));
    }

    let handler = Handler::new(config.clone(), audit);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until it shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
