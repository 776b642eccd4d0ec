//! Self-assign role service.
//!
//! Decides whether a member's self-assign request grants, revokes, or is denied, and
//! performs the resulting role change on Discord. The order of checks is fixed:
//!
//! 1. The target role must resolve.
//! 2. An elevated target is always denied and logged as a critical incident, even
//!    if the member already holds it.
//! 3. A member holding the target always has it removed, whether or not they are
//!    still eligible.
//! 4. Otherwise the member is granted the target when the request lists no
//!    eligibility roles, or when they hold at least one eligibility role that
//!    resolves.
//!
//! Role membership has no compare-and-swap on Discord. Two concurrent toggles for the
//! same member and role may race; Discord's state is authoritative and the bot does
//! not serialize requests.

use crate::{
    data::discord::GuildRoleRepository,
    error::AppError,
    model::{
        role::role_mention, AuditEntry, GuildMember, GuildRole, Outcome, OutcomeKind,
        SelfAssignRequest, Severity,
    },
    service::{audit::AuditSink, permission::is_elevated},
};

/// Source label attached to audit entries written by this service.
pub const AUDIT_SOURCE: &str = "SelfAssign";

pub struct SelfAssignService<'a> {
    roles: &'a dyn GuildRoleRepository,
    audit: &'a dyn AuditSink,
}

impl<'a> SelfAssignService<'a> {
    /// Creates a new service instance.
    ///
    /// # Arguments
    /// - `roles` - Repository used to resolve roles and change role membership
    /// - `audit` - Sink receiving grant, revoke, and incident entries
    pub fn new(roles: &'a dyn GuildRoleRepository, audit: &'a dyn AuditSink) -> Self {
        Self { roles, audit }
    }

    /// Handles one self-assign request for a member.
    ///
    /// Denials are returned as failed outcomes, not errors. On a grant or revoke the
    /// member's local role snapshot is updated to match, so later requests in the same
    /// invocation see the change.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the request was made in
    /// - `member` - The requesting member and the roles they currently hold
    /// - `request` - Target role and eligibility roles
    ///
    /// # Returns
    /// - `Ok(Outcome)` - Grant, revoke, or the reason the request was denied
    /// - `Err(AppError)` - Target role lookup, grant, or revoke failed on Discord
    pub async fn assign(
        &self,
        guild_id: u64,
        member: &mut GuildMember,
        request: &SelfAssignRequest,
    ) -> Result<Outcome, AppError> {
        let Some(target) = self
            .roles
            .fetch_role(guild_id, request.target_role_id)
            .await?
        else {
            tracing::debug!(
                "Self-assign target role {} not found in guild {}",
                request.target_role_id,
                guild_id
            );
            return Ok(Outcome::failure(
                OutcomeKind::RoleNotFound,
                format!("Role {} could not be found.", request.target_role_id),
            ));
        };

        if is_elevated(&target) {
            self.audit
                .log(
                    AuditEntry::new(
                        Severity::Critical,
                        AUDIT_SOURCE,
                        format!(
                            "Attempted self assign of role {} with elevated permissions.",
                            target.mention()
                        ),
                    )
                    .with_user(&*member),
                )
                .await;

            return Ok(Outcome::failure(
                OutcomeKind::Elevated,
                format!(
                    "{} can not be assigned by self-assign. This incident has been logged.",
                    target.mention()
                ),
            ));
        }

        if member.has_role(target.role_id) {
            return self.unassign(guild_id, member, &target).await;
        }

        let source_roles = self.resolve_source_roles(guild_id, request).await;

        if request.source_role_ids.is_empty()
            || member.has_any_role(source_roles.iter().map(|role| &role.role_id))
        {
            return self.grant(guild_id, member, &target).await;
        }

        Ok(ineligible(&target, &source_roles))
    }

    async fn unassign(
        &self,
        guild_id: u64,
        member: &mut GuildMember,
        target: &GuildRole,
    ) -> Result<Outcome, AppError> {
        self.audit
            .log(
                AuditEntry::new(
                    Severity::Info,
                    AUDIT_SOURCE,
                    format!(
                        "Removing Role {} from User {}",
                        target.mention(),
                        member.mention()
                    ),
                )
                .with_user(&*member),
            )
            .await;

        self.roles
            .remove_member_role(guild_id, member.user_id, target.role_id)
            .await?;
        member.role_ids.remove(&target.role_id);

        Ok(Outcome::success(
            OutcomeKind::Removed,
            format!("Successfully removed role {}", target.mention()),
            target.color,
        ))
    }

    async fn grant(
        &self,
        guild_id: u64,
        member: &mut GuildMember,
        target: &GuildRole,
    ) -> Result<Outcome, AppError> {
        self.audit
            .log(
                AuditEntry::new(
                    Severity::Info,
                    AUDIT_SOURCE,
                    format!(
                        "Assigning Role {} to User {}",
                        target.mention(),
                        member.mention()
                    ),
                )
                .with_user(&*member),
            )
            .await;

        self.roles
            .add_member_role(guild_id, member.user_id, target.role_id)
            .await?;
        member.role_ids.insert(target.role_id);

        Ok(Outcome::success(
            OutcomeKind::Assigned,
            format!("Successfully assigned role {}", target.mention()),
            target.color,
        ))
    }

    /// Resolves eligibility roles, skipping any that are missing or fail to load.
    async fn resolve_source_roles(
        &self,
        guild_id: u64,
        request: &SelfAssignRequest,
    ) -> Vec<GuildRole> {
        let mut resolved = Vec::with_capacity(request.source_role_ids.len());

        for role_id in &request.source_role_ids {
            match self.roles.fetch_role(guild_id, *role_id).await {
                Ok(Some(role)) => resolved.push(role),
                Ok(None) => {
                    tracing::debug!(
                        "Skipping missing eligibility role {} in guild {}",
                        role_id,
                        guild_id
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping eligibility role {} in guild {}: {}",
                        role_id,
                        guild_id,
                        e
                    );
                }
            }
        }

        resolved
    }
}

fn ineligible(target: &GuildRole, source_roles: &[GuildRole]) -> Outcome {
    if source_roles.is_empty() {
        return Outcome::failure(
            OutcomeKind::Ineligible,
            format!(
                "None of the roles required to assign {} exist anymore.",
                role_mention(target.role_id)
            ),
        );
    }

    let required = source_roles
        .iter()
        .map(GuildRole::mention)
        .collect::<Vec<_>>()
        .join(", ");

    Outcome::failure(
        OutcomeKind::Ineligible,
        format!(
            "You need any of the following roles to be able to assign this tag: {}",
            required
        ),
    )
}
