//! Discord bot integration.
//!
//! The gateway client delivers slash commands and component interactions to
//! `handler`, which converts them into invocations for the `router`. Routed
//! handlers live in `command`; the `reporter` turns each dispatch result into the
//! reply shown to the user and an audit entry.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Interactions are delivered regardless of intents,
//! and member data arrives with the interaction payload.

pub mod command;
pub mod embed;
pub mod handler;
pub mod precondition;
pub mod reporter;
pub mod responder;
pub mod router;
pub mod start;

#[cfg(test)]
mod test;
