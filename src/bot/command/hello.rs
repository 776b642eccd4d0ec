use serenity::all::CreateCommand;

use crate::{
    bot::{reporter::deliver, router::DispatchContext},
    error::AppError,
    model::{CommandInvocation, Reply},
};

pub const NAME: &str = "hello";

pub fn command() -> CreateCommand {
    CreateCommand::new(NAME).description("Hello World")
}

/// Greets the invoking user.
pub async fn run(
    invocation: &mut CommandInvocation,
    ctx: &DispatchContext<'_>,
) -> Result<(), AppError> {
    deliver(
        invocation,
        ctx.responder,
        &Reply::Text("Hello World!".to_string()),
    )
    .await
}
