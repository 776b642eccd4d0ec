//! Interaction response channel.
//!
//! Discord gives each interaction a single-use primary response (an immediate reply
//! or a deferral) followed by any number of follow-up messages. `InteractionResponder`
//! is the seam the router and reporter talk to. Which channel to use next is decided
//! by the invocation's `ResponseState`; see `bot::reporter::deliver`.
//!
//! `SerenityResponder` implements the channel for slash commands and message
//! components. Every reply is ephemeral.

use serenity::all::{
    ActionRow, ActionRowComponent, CommandInteraction, ComponentInteraction, ComponentType,
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditMessage, SelectMenu, SelectMenuOption,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::embed::result_embed,
    error::AppError,
    model::{InvokingUser, Reply},
};

/// Response channel of a single interaction.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Acknowledges the interaction without content, using up the primary response.
    async fn defer(&self) -> Result<(), AppError>;

    /// Sends the primary response.
    async fn respond(&self, reply: &Reply) -> Result<(), AppError>;

    /// Sends a follow-up message after the primary response was used.
    async fn follow_up(&self, reply: &Reply) -> Result<(), AppError>;

    /// Clears the selection of the message components the interaction came from.
    ///
    /// A no-op for interactions that are not attached to a message.
    async fn reset_components(&self) -> Result<(), AppError>;
}

enum Target {
    Command(CommandInteraction),
    Component(ComponentInteraction),
}

/// Responder backed by Serenity's interaction endpoints.
pub struct SerenityResponder {
    http: Arc<Http>,
    target: Target,
    user: InvokingUser,
}

impl SerenityResponder {
    pub fn for_command(
        http: Arc<Http>,
        interaction: CommandInteraction,
        user: InvokingUser,
    ) -> Self {
        Self {
            http,
            target: Target::Command(interaction),
            user,
        }
    }

    pub fn for_component(
        http: Arc<Http>,
        interaction: ComponentInteraction,
        user: InvokingUser,
    ) -> Self {
        Self {
            http,
            target: Target::Component(interaction),
            user,
        }
    }

    fn response_message(
        &self,
        reply: &Reply,
    ) -> Result<CreateInteractionResponseMessage, AppError> {
        let message = CreateInteractionResponseMessage::new().ephemeral(true);

        Ok(match reply {
            Reply::Text(content) => message.content(content),
            Reply::Result {
                success,
                description,
                color,
            } => message.embed(result_embed(*success, description, *color, &self.user)?),
        })
    }

    fn followup_message(
        &self,
        reply: &Reply,
    ) -> Result<CreateInteractionResponseFollowup, AppError> {
        let message = CreateInteractionResponseFollowup::new().ephemeral(true);

        Ok(match reply {
            Reply::Text(content) => message.content(content),
            Reply::Result {
                success,
                description,
                color,
            } => message.embed(result_embed(*success, description, *color, &self.user)?),
        })
    }
}

#[async_trait]
impl InteractionResponder for SerenityResponder {
    async fn defer(&self) -> Result<(), AppError> {
        match &self.target {
            Target::Command(interaction) => interaction.defer_ephemeral(&self.http).await?,
            Target::Component(interaction) => interaction.defer_ephemeral(&self.http).await?,
        }

        Ok(())
    }

    async fn respond(&self, reply: &Reply) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Message(self.response_message(reply)?);

        match &self.target {
            Target::Command(interaction) => {
                interaction.create_response(&self.http, response).await?
            }
            Target::Component(interaction) => {
                interaction.create_response(&self.http, response).await?
            }
        }

        Ok(())
    }

    async fn follow_up(&self, reply: &Reply) -> Result<(), AppError> {
        let followup = self.followup_message(reply)?;

        match &self.target {
            Target::Command(interaction) => {
                interaction.create_followup(&self.http, followup).await?;
            }
            Target::Component(interaction) => {
                interaction.create_followup(&self.http, followup).await?;
            }
        }

        Ok(())
    }

    async fn reset_components(&self) -> Result<(), AppError> {
        let Target::Component(interaction) = &self.target else {
            return Ok(());
        };

        // Re-sending the components unchanged makes clients drop the current selection.
        let mut message = (*interaction.message).clone();
        let Some(components) = rebuild_components(&message.components) else {
            tracing::warn!(
                "Message {} has components that cannot be rebuilt, leaving them untouched",
                message.id
            );
            return Ok(());
        };

        message
            .edit(&self.http, EditMessage::new().components(components))
            .await?;

        Ok(())
    }
}

/// Converts received message components back into builders with nothing preselected.
///
/// # Returns
/// - `Some(Vec<CreateActionRow>)` - One builder per received row, in order
/// - `None` - A row holds a component that cannot be sent back on a message
fn rebuild_components(rows: &[ActionRow]) -> Option<Vec<CreateActionRow>> {
    rows.iter().map(rebuild_row).collect()
}

fn rebuild_row(row: &ActionRow) -> Option<CreateActionRow> {
    if let [ActionRowComponent::SelectMenu(menu)] = row.components.as_slice() {
        return rebuild_select_menu(menu).map(CreateActionRow::SelectMenu);
    }

    let buttons = row
        .components
        .iter()
        .map(|component| match component {
            ActionRowComponent::Button(button) => Some(CreateButton::from(button.clone())),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    (!buttons.is_empty()).then_some(CreateActionRow::Buttons(buttons))
}

fn rebuild_select_menu(menu: &SelectMenu) -> Option<CreateSelectMenu> {
    let kind = match menu.kind {
        ComponentType::StringSelect => CreateSelectMenuKind::String {
            options: menu.options.iter().map(rebuild_option).collect(),
        },
        ComponentType::UserSelect => CreateSelectMenuKind::User {
            default_users: None,
        },
        ComponentType::RoleSelect => CreateSelectMenuKind::Role {
            default_roles: None,
        },
        ComponentType::MentionableSelect => CreateSelectMenuKind::Mentionable {
            default_users: None,
            default_roles: None,
        },
        ComponentType::ChannelSelect => CreateSelectMenuKind::Channel {
            channel_types: (!menu.channel_types.is_empty()).then(|| menu.channel_types.clone()),
            default_channels: None,
        },
        _ => return None,
    };

    let mut rebuilt = CreateSelectMenu::new(menu.custom_id.clone()?, kind).disabled(menu.disabled);
    if let Some(placeholder) = &menu.placeholder {
        rebuilt = rebuilt.placeholder(placeholder);
    }
    if let Some(min_values) = menu.min_values {
        rebuilt = rebuilt.min_values(min_values);
    }
    if let Some(max_values) = menu.max_values {
        rebuilt = rebuilt.max_values(max_values);
    }

    Some(rebuilt)
}

fn rebuild_option(option: &SelectMenuOption) -> CreateSelectMenuOption {
    let mut rebuilt =
        CreateSelectMenuOption::new(&option.label, &option.value).default_selection(false);
    if let Some(description) = &option.description {
        rebuilt = rebuilt.description(description);
    }
    if let Some(emoji) = &option.emoji {
        rebuilt = rebuilt.emoji(emoji.clone());
    }
    rebuilt
}
