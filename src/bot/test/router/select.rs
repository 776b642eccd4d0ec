use super::*;

/// Tests that select-menu entries are processed in order and the menu is reset.
///
/// Verifies that a failing first entry does not stop the second one, and that the
/// selection is reset after both replies.
///
/// Expected: Ok with RoleNotFound then Assigned outcomes
#[tokio::test]
async fn processes_entries_sequentially_and_resets() {
    let test = TestBuilder::new()
        .with_role(create_test_role(222, "Tag", 0, 1, 0))
        .with_role(create_test_role(333, "Verified", 0, 2, 0))
        .with_member(TEST_USER_ID, &[333])
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("s_selfassign_menu", select(&["111", "222;333"]), &[333]);

    let outcomes = Router::default()
        .dispatch(&mut invocation, &ctx)
        .await
        .unwrap();

    let kinds: Vec<OutcomeKind> = outcomes.iter().map(|outcome| outcome.kind).collect();
    assert_eq!(kinds, vec![OutcomeKind::RoleNotFound, OutcomeKind::Assigned]);
    assert_eq!(
        responder.sent(),
        vec![
            Sent::Deferred,
            Sent::FollowUp(Reply::failure("Role 111 could not be found.")),
            Sent::FollowUp(Reply::from(&outcomes[1])),
            Sent::ComponentsReset,
        ]
    );
    assert_eq!(
        test.guild.mutations(),
        vec![RoleMutation::Added {
            user_id: TEST_USER_ID,
            role_id: 222
        }]
    );
}

/// Tests that later entries see role changes made by earlier ones.
///
/// Verifies that selecting the same role twice grants and then revokes it.
///
/// Expected: Assigned then Removed
#[tokio::test]
async fn later_entries_see_earlier_changes() {
    let test = TestBuilder::new()
        .with_role(create_test_role(111, "Tag", 0, 1, 0))
        .with_member(TEST_USER_ID, &[])
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("s_selfassign_menu", select(&["111", "111"]), &[]);

    let outcomes = Router::default()
        .dispatch(&mut invocation, &ctx)
        .await
        .unwrap();

    assert_eq!(outcomes[0].kind, OutcomeKind::Assigned);
    assert_eq!(outcomes[1].kind, OutcomeKind::Removed);
    assert!(!invocation.member.as_ref().unwrap().has_role(111));
}

/// Tests that malformed and failing entries are reported per entry.
///
/// Verifies that a bad token yields InvalidArguments, a platform failure yields
/// Failed, and the menu is still reset.
///
/// Expected: Ok with InvalidArguments then Failed outcomes
#[tokio::test]
async fn reports_entry_failures_and_continues() {
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
    let mut invocation = guild_invocation("s_selfassign_menu", select(&["abc", "111"]), &[]);

    let outcomes = Router::default()
        .dispatch(&mut invocation, &ctx)
        .await
        .unwrap();

    assert_eq!(outcomes[0].kind, OutcomeKind::InvalidArguments);
    assert_eq!(outcomes[0].description, "Invalid number or arguments");
    assert_eq!(outcomes[1].kind, OutcomeKind::Failed);
    assert!(outcomes[1].description.starts_with("Command exception: "));
    assert_eq!(responder.sent().last(), Some(&Sent::ComponentsReset));
}

/// Tests that a failed menu reset does not fail the invocation.
///
/// Expected: Ok with the entry's outcome
#[tokio::test]
async fn ignores_failed_reset() {
    let test = TestBuilder::new()
        .with_role(create_test_role(111, "Tag", 0, 1, 0))
        .build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::failing_reset();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("s_selfassign_menu", select(&["111"]), &[]);

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert!(result.is_ok());
    assert!(!responder.sent().contains(&Sent::ComponentsReset));
}

/// Tests a select-menu route receiving a payload without values.
///
/// Expected: Err(CommandError::BadArgs) before deferring
#[tokio::test]
async fn rejects_select_without_values() {
    let test = TestBuilder::new().build();
    let audit = RecordingAudit::default();
    let responder = RecordingResponder::default();
    let ctx = DispatchContext {
        roles: &test.guild,
        audit: &audit,
        responder: &responder,
    };
    let mut invocation = guild_invocation("s_selfassign_menu", InteractionData::Button, &[]);

    let result = Router::default().dispatch(&mut invocation, &ctx).await;

    assert!(matches!(result, Err(CommandError::BadArgs(_))));
    assert!(responder.sent().is_empty());
}
