use super::*;

fn elevated_guild(permissions: Permissions, held: &[u64]) -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_role(create_test_role(TARGET, "Staff", 0, 5, permissions.bits()))
        .with_member(TEST_USER_ID, held)
        .build()
}

/// Tests denial of a role carrying the administrator permission.
///
/// Verifies that exactly one critical audit entry is written and that no role
/// change is made.
///
/// Expected: Ok(Outcome) with kind Elevated
#[tokio::test]
async fn denies_administrator_role() -> Result<(), AppError> {
    let test = elevated_guild(Permissions::ADMINISTRATOR, &[]);
    let audit = RecordingAudit::default();
    let mut member = test_member(&[]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Elevated);
    assert_eq!(
        outcome.description,
        "<@&111> can not be assigned by self-assign. This incident has been logged."
    );
    assert!(test.guild.mutations().is_empty());

    let critical = audit.with_severity(Severity::Critical);
    assert_eq!(critical.len(), 1);
    assert_eq!(audit.entries().len(), 1);
    assert_eq!(
        critical[0].message,
        "Attempted self assign of role <@&111> with elevated permissions."
    );
    assert_eq!(critical[0].user.as_ref().map(|u| u.user_id), Some(TEST_USER_ID));

    Ok(())
}

/// Tests that an elevated role is denied even when the member holds it.
///
/// Verifies that the elevated check runs before the revoke path.
///
/// Expected: Ok(Outcome) with kind Elevated and the role still held
#[tokio::test]
async fn denies_held_elevated_role() -> Result<(), AppError> {
    let test = elevated_guild(Permissions::MANAGE_ROLES, &[TARGET]);
    let audit = RecordingAudit::default();
    let mut member = test_member(&[TARGET]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Elevated);
    assert!(test.guild.mutations().is_empty());
    assert!(member.has_role(TARGET));
    assert_eq!(audit.with_severity(Severity::Critical).len(), 1);

    Ok(())
}

/// Tests that eligibility does not bypass the elevated check.
///
/// Expected: Ok(Outcome) with kind Elevated
#[tokio::test]
async fn denies_elevated_role_to_eligible_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_role(create_test_role(
            TARGET,
            "Moderator",
            0,
            5,
            (Permissions::BAN_MEMBERS | Permissions::SEND_MESSAGES).bits(),
        ))
        .with_role(create_test_role(SOURCE_A, "Verified", 0, 2, 0))
        .with_member(TEST_USER_ID, &[SOURCE_A])
        .build();
    let audit = RecordingAudit::default();
    let mut member = test_member(&[SOURCE_A]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111;222"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Elevated);
    assert!(test.guild.mutations().is_empty());

    Ok(())
}

/// Tests that ordinary permissions do not make a role elevated.
///
/// Expected: Ok(Outcome) with kind Assigned and no critical entry
#[tokio::test]
async fn grants_role_with_ordinary_permissions() -> Result<(), AppError> {
    let test = elevated_guild(
        Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL | Permissions::CONNECT,
        &[],
    );
    let audit = RecordingAudit::default();
    let mut member = test_member(&[]);

    let service = SelfAssignService::new(&test.guild, &audit);
    let outcome = service
        .assign(test.guild_id(), &mut member, &request("111"))
        .await?;

    assert_eq!(outcome.kind, OutcomeKind::Assigned);
    assert!(audit.with_severity(Severity::Critical).is_empty());

    Ok(())
}
