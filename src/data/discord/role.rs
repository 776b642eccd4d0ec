//! Discord guild role repository.
//!
//! Role membership lives entirely on Discord, so this repository is the only way the
//! bot reads roles or changes who holds them. `GuildRoleRepository` is the seam the
//! self-assign service depends on; `SerenityRoleRepository` implements it against
//! Discord's REST API.
//!
//! Every call is attempted once. A failed call surfaces as an `AppError` and is
//! never retried.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::{internal::InternalError, AppError},
    model::GuildRole,
};

/// Audit log reason attached to role changes made by the bot.
const SELF_ASSIGN_REASON: &str = "Self-assign";

/// Read and mutate guild roles and role membership.
#[async_trait]
pub trait GuildRoleRepository: Send + Sync {
    /// Fetches a fresh snapshot of a role.
    ///
    /// # Returns
    /// - `Ok(Some(GuildRole))` - The role exists in the guild
    /// - `Ok(None)` - No role with this ID exists in the guild
    /// - `Err(AppError)` - The lookup itself failed
    async fn fetch_role(&self, guild_id: u64, role_id: u64) -> Result<Option<GuildRole>, AppError>;

    /// Grants a role to a guild member.
    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    /// Revokes a role from a guild member.
    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;
}

/// Repository backed by the Discord REST API.
pub struct SerenityRoleRepository {
    /// Discord HTTP client shared with the gateway client.
    http: Arc<Http>,
}

impl SerenityRoleRepository {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used for role lookups and membership changes
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildRoleRepository for SerenityRoleRepository {
    async fn fetch_role(&self, guild_id: u64, role_id: u64) -> Result<Option<GuildRole>, AppError> {
        let result = self
            .http
            .get_guild_role(guild_id_from(guild_id)?, role_id_from(role_id)?)
            .await;

        match result {
            Ok(role) => Ok(Some(GuildRole::from_role(&role))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                guild_id_from(guild_id)?,
                user_id_from(user_id)?,
                role_id_from(role_id)?,
                Some(SELF_ASSIGN_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                guild_id_from(guild_id)?,
                user_id_from(user_id)?,
                role_id_from(role_id)?,
                Some(SELF_ASSIGN_REASON),
            )
            .await?;

        Ok(())
    }
}

/// Whether Discord answered a request with 404, as it does for unknown roles.
fn is_not_found(error: &serenity::Error) -> bool {
    match error {
        serenity::Error::Http(e) => e.status_code().is_some_and(|status| status.as_u16() == 404),
        _ => false,
    }
}

// Serenity ID constructors panic on zero.
fn guild_id_from(id: u64) -> Result<GuildId, AppError> {
    non_zero(id).map(GuildId::new)
}

fn user_id_from(id: u64) -> Result<UserId, AppError> {
    non_zero(id).map(UserId::new)
}

fn role_id_from(id: u64) -> Result<RoleId, AppError> {
    non_zero(id).map(RoleId::new)
}

fn non_zero(id: u64) -> Result<u64, AppError> {
    if id == 0 {
        return Err(InternalError::ZeroId.into());
    }
    Ok(id)
}
