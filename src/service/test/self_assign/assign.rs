use super::*;

/// Tests granting a role the member is eligible for.
///
/// Verifies that a member holding one of two eligibility roles is granted the
/// target role, that the role color is carried on the outcome, and that the grant
/// is audited at info level.
///
/// Expected: Ok(Outcome) with kind Assigned and one Added mutation
#[tokio::test]
async fn grants_role_when_member_holds_any_source() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_role(create_test_role(TARGET, "Tag", TARGET_COLOR, 1, 0))
        .with_role(create_test_role(SOURCE_A, "Verified", 0, 2, 0))
        .with_role(create_test_role(SOURCE_B, "Veteran", 0, 3, 0))
        .with_member(TEST_USER_ID, &[SOURCE_B])
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[SOURCE_B]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111;222;333"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Assigned);
    assert_eq!(outcome.description, "Successfully assigned role <@&111>");
    assert_eq!(outcome.role_color, Some(TARGET_COLOR));
    assert_eq!(
        test.guild.mutations(),
        vec![RoleMutation::Added {
            user_id: TEST_USER_ID,
            role_id: TARGET
        }]
    );
    assert!(test.guild.member_roles(TEST_USER_ID).contains(&TARGET));
    assert!(member.has_role(TARGET));

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Info);
    assert_eq!(entries[0].source, AUDIT_SOURCE);
    assert_eq!(entries[0].message, "Assigning Role <@&111> to User <@42>");

    Ok(())
}

/// Tests granting a role without eligibility requirements.
///
/// Verifies that a request listing only the target role is granted to a member
/// holding no roles at all.
///
/// Expected: Ok(Outcome) with kind Assigned
#[tokio::test]
async fn grants_role_without_sources() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_role(create_test_role(TARGET, "Tag", 0, 1, 0))
        .with_member(TEST_USER_ID, &[])
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Assigned);
    assert!(outcome.is_success());
    assert_eq!(test.guild.member_roles(TEST_USER_ID), [TARGET].into());

    Ok(())
}

/// Tests that source roles are not looked up before the target is known.
///
/// Verifies that a missing target role ends the request after a single lookup
/// with a not-found outcome and no mutation.
///
/// Expected: Ok(Outcome) with kind RoleNotFound
#[tokio::test]
async fn reports_missing_target_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_role(create_test_role(SOURCE_A, "Verified", 0, 2, 0))
        .with_member(TEST_USER_ID, &[SOURCE_A])
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[SOURCE_A]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111;222"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::RoleNotFound);
    assert_eq!(outcome.description, "Role 111 could not be found.");
    assert_eq!(test.guild.lookups(), vec![TARGET]);
    assert!(test.guild.mutations().is_empty());
    assert!(audit.entries().is_empty());

    Ok(())
}

/// Tests that a failing target lookup surfaces as an error.
///
/// Expected: Err(AppError::DiscordErr) and no mutation
#[tokio::test]
async fn propagates_target_lookup_failure() {
    let test = TestBuilder::new()
        .with_role(create_test_role(TARGET, "Tag", 0, 1, 0))
        .with_failing_lookup(TARGET)
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let result = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert!(test.guild.mutations().is_empty());
}

/// Tests that a failing grant surfaces as an error.
///
/// Verifies that the member snapshot is left untouched when Discord rejects the
/// role change.
///
/// Expected: Err(AppError::DiscordErr)
#[tokio::test]
async fn propagates_grant_failure() {
    let test = TestBuilder::new()
        .with_role(create_test_role(TARGET, "Tag", 0, 1, 0))
        .with_failing_mutations()
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let result = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert!(!member.has_role(TARGET));
}
