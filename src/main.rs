mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod util;


use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::AppError, service::log_forward};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (log_layer, log_receiver) = log_forward::channel();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(log_layer)
        .init();

    let config = Arc::new(Config::from_env()?);

    let client = bot::start::init_bot(config, log_receiver).await?;
    bot::start::start_bot(client).await
}
