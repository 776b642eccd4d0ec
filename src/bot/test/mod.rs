use crate::{
    bot::{
        command::CommandModule,
        precondition::{check_all, Precondition},
        reporter::{deliver, InvocationCounter, OutcomeReporter, AUDIT_SOURCE},
        router::{DispatchContext, Route, RouteHandler, RoutePattern, Router},
    },
    error::command::CommandError,
    model::{
        CommandInvocation, InteractionData, InvocationGuild, Outcome, OutcomeKind, Reply,
        ResponseState, Severity,
    },
    testing::{test_member, test_user, RecordingAudit, RecordingResponder, Sent, TEST_USER_ID},
};
use serenity::all::Permissions;
use test_utils::{
    builder::{TestBuilder, DEFAULT_GUILD_ID},
    guild::RoleMutation,
    serenity::create_test_role,
};


/// Invocation from a guild member holding `role_ids`, with the bot allowed to manage roles.
fn guild_invocation(
    identifier: &str,
    data: InteractionData,
    role_ids: &[u64],
) -> CommandInvocation {
    CommandInvocation::new(identifier, data, test_user())
        .in_guild(
            InvocationGuild {
                guild_id: DEFAULT_GUILD_ID,
                name: "Test Guild".to_string(),
            },
            Some(test_member(role_ids)),
        )
        .with_app_permissions(Permissions::MANAGE_ROLES)
}

fn select(values: &[&str]) -> InteractionData {
    InteractionData::SelectMenu {
        values: values.iter().map(|value| value.to_string()).collect(),
    }
}
