//! Interaction event handler.
//!
//! Converts Serenity interactions into `CommandInvocation`s at the platform
//! boundary, then dispatches and reports each one. Every interaction runs in the
//! gateway's own task; nothing here is shared between interactions except the
//! router, the audit sink and the invocation counter.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context, GuildId,
    Interaction, Permissions, User,
};

use crate::{
    bot::{
        handler::Handler,
        reporter::OutcomeReporter,
        responder::SerenityResponder,
        router::{DispatchContext, Router},
    },
    data::discord::SerenityRoleRepository,
    model::{CommandInvocation, GuildMember, InteractionData, InvocationGuild, InvokingUser},
};

/// Handles an interaction create event.
///
/// Interactions other than slash commands and message components are ignored.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let (mut invocation, responder) = match interaction {
        Interaction::Command(command) => {
            let invocation = command_invocation(&ctx, &command);
            let responder =
                SerenityResponder::for_command(ctx.http.clone(), command, invocation.user.clone());
            (invocation, responder)
        }
        Interaction::Component(component) => {
            let invocation = component_invocation(&ctx, &component);
            let responder = SerenityResponder::for_component(
                ctx.http.clone(),
                component,
                invocation.user.clone(),
            );
            (invocation, responder)
        }
        _ => return,
    };

    let roles = SerenityRoleRepository::new(ctx.http.clone());
    let dispatch = DispatchContext {
        roles: &roles,
        audit: handler.audit.as_ref(),
        responder: &responder,
    };
    let reporter = OutcomeReporter::new(handler.audit.as_ref(), &handler.counter);

    process(&handler.router, &reporter, &mut invocation, &dispatch).await;
}

/// Dispatches an invocation and reports its result.
pub async fn process(
    router: &Router,
    reporter: &OutcomeReporter<'_>,
    invocation: &mut CommandInvocation,
    ctx: &DispatchContext<'_>,
) {
    let result = router.dispatch(invocation, ctx).await;
    reporter.report(invocation, ctx.responder, &result).await;
}

fn command_invocation(ctx: &Context, command: &CommandInteraction) -> CommandInvocation {
    build_invocation(
        ctx,
        command.data.name.clone(),
        InteractionData::SlashCommand,
        &command.user,
        command.guild_id,
        command.member.as_deref().map(GuildMember::from_member),
        command.app_permissions,
    )
}

fn component_invocation(ctx: &Context, component: &ComponentInteraction) -> CommandInvocation {
    build_invocation(
        ctx,
        component.data.custom_id.clone(),
        component_data(&component.data.kind),
        &component.user,
        component.guild_id,
        component.member.as_ref().map(GuildMember::from_member),
        component.app_permissions,
    )
}

/// Decodes the payload of a component interaction.
fn component_data(kind: &ComponentInteractionDataKind) -> InteractionData {
    match kind {
        ComponentInteractionDataKind::StringSelect { values } => InteractionData::SelectMenu {
            values: values.clone(),
        },
        // Other components carry their parameters in the custom ID only.
        _ => InteractionData::Button,
    }
}

fn build_invocation(
    ctx: &Context,
    identifier: String,
    data: InteractionData,
    user: &User,
    guild_id: Option<GuildId>,
    member: Option<GuildMember>,
    app_permissions: Option<Permissions>,
) -> CommandInvocation {
    let user = InvokingUser {
        user_id: user.id.get(),
        name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
        avatar_url: user.avatar_url(),
    };

    let mut invocation = CommandInvocation::new(identifier, data, user);

    if let Some(guild_id) = guild_id {
        let name = ctx
            .cache
            .guild(guild_id)
            .map(|guild| guild.name.clone())
            .unwrap_or_else(|| guild_id.to_string());
        invocation = invocation.in_guild(
            InvocationGuild {
                guild_id: guild_id.get(),
                name,
            },
            member,
        );
    }

    if let Some(permissions) = app_permissions {
        invocation = invocation.with_app_permissions(permissions);
    }

    invocation
}
