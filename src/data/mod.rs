//! Access to state owned by Discord.
//!
//! The bot keeps no persistence of its own; the repositories here read and mutate
//! guild state through the Discord API.

pub mod discord;
