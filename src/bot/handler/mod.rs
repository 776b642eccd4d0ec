use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    bot::{reporter::InvocationCounter, router::Router},
    config::Config,
    service::audit::AuditSink,
};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub audit: Arc<dyn AuditSink>,
    pub router: Router,
    pub counter: InvocationCounter,
}

impl Handler {
    pub fn new(config: Arc<Config>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            config,
            audit,
            router: Router::default(),
            counter: InvocationCounter::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, self.audit.as_ref(), ctx, ready).await;
    }

    /// Called for every slash command and component interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
