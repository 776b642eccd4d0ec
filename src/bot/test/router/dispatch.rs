use super::*;

/// Tests dispatch of an unregistered identifier.
///
/// Verifies that nothing is sent, not even a deferral, so the reporter can still
/// use the primary response.
///
/// Expected: Err(CommandError::UnknownCommand)
#[tokio::test]
async fn rejects_unknown_command() {
    let test = TestBuilder::new().build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("x_unknown_1", InteractionData::Button, &[]);

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert_eq!(
        result,
        Err(CommandError::UnknownCommand("x_unknown_1".to_string()))
    );
    assert!(responder.sent().is_empty());
    assert_eq!(invocation.response_state, ResponseState::NotResponded);
}

/// Tests dispatch of a button with a malformed token.
///
/// Expected: Err(CommandError::BadArgs) before deferring, no role lookups
#[tokio::test]
async fn rejects_malformed_button_token() {
    let test = TestBuilder::new().build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("b_selfassign_111;abc", InteractionData::Button, &[]);

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert!(matches!(result, Err(CommandError::BadArgs(_))));
    assert!(responder.sent().is_empty());
    assert!(test.guild.lookups().is_empty());
}

/// Tests that preconditions are checked before the handler runs.
///
/// Expected: Err(CommandError::UnmetPrecondition) with no deferral and no lookups
#[tokio::test]
async fn checks_preconditions_before_deferring() {
    let test = TestBuilder::new()
        .with_role(create_test_role(111, "Tag", 0, 1, 0))
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("b_selfassign_111", InteractionData::Button, &[])
        .with_app_permissions(Permissions::empty());

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert!(matches!(
        result,
        Err(CommandError::UnmetPrecondition { .. })
    ));
    assert!(responder.sent().is_empty());
    assert!(test.guild.lookups().is_empty());
}

/// Tests a self-assign button press granting a role.
///
/// Verifies that the interaction is deferred first and the result is sent as a
/// follow-up.
///
/// Expected: Ok with one Assigned outcome
#[tokio::test]
async fn dispatches_button_to_self_assign() {
    let test = TestBuilder::new()
        .with_role(create_test_role(111, "Tag", 0x3498DB, 1, 0))
        .with_role(create_test_role(222, "Verified", 0, 2, 0))
        .with_member(TEST_USER_ID, &[222])
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation =
        guild_invocation("b_selfassign_111;222;333", InteractionData::Button, &[222]);

    let outcomes = Router::default()
        .dispatch(&mut invocation, &ctx)
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].kind, OutcomeKind::Assigned);
    assert_eq!(
        responder.sent(),
        vec![
            Sent::Deferred,
            Sent::FollowUp(Reply::Result {
                success: true,
                description: "Successfully assigned role <@&111>".to_string(),
                color: Some(0x3498DB),
            }),
        ]
    );
    assert_eq!(invocation.response_state, ResponseState::Responded);
    assert!(invocation.member.as_ref().unwrap().has_role(111));
}

/// Tests that a platform failure during a button press becomes an exception.
///
/// Expected: Err(CommandError::Exception) after deferring
#[tokio::test]
async fn maps_platform_failure_to_exception() {
    let test = TestBuilder::new()
        .with_role(create_test_role(111, "Tag", 0, 1, 0))
        .with_failing_mutations()
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("b_selfassign_111", InteractionData::Button, &[]);

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert!(matches!(result, Err(CommandError::Exception(_))));
    assert_eq!(responder.sent(), vec![Sent::Deferred]);
}

/// Tests the hello slash command.
///
/// Expected: Ok with no outcomes and a greeting follow-up
#[tokio::test]
async fn dispatches_hello() {
    let test = TestBuilder::new().build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation =
        CommandInvocation::new("hello", InteractionData::SlashCommand, test_user());

    let outcomes = Router::default()
        .dispatch(&mut invocation, &ctx)
        .await
        .unwrap();

    assert!(outcomes.is_empty());
    assert_eq!(
        responder.sent(),
        vec![
            Sent::Deferred,
            Sent::FollowUp(Reply::Text("Hello World!".to_string())),
        ]
    );
}
