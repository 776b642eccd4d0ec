//! Command modules.
//!
//! A module groups related slash commands and component routes so they can be
//! registered together and restricted to a single guild through configuration.

pub mod hello;
pub mod register;
pub mod self_assign;

use serenity::all::CreateCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandModule {
    /// General purpose commands.
    Base,
    /// Self-assign buttons and select menus; has no slash commands.
    SelfAssign,
}

impl CommandModule {
    pub const ALL: [CommandModule; 2] = [CommandModule::Base, CommandModule::SelfAssign];

    /// Name used to refer to the module in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::SelfAssign => "selfassign",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|module| module.name().eq_ignore_ascii_case(name))
    }

    /// Slash command definitions registered for the module.
    pub fn slash_commands(self) -> Vec<CreateCommand> {
        match self {
            Self::Base => vec![hello::command()],
            Self::SelfAssign => Vec::new(),
        }
    }
}
