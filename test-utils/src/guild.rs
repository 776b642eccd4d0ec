//! In-memory stand-in for a Discord guild.
//!
//! `FakeGuild` owns a set of Serenity roles and each member's role membership, and
//! records every role change it is asked to make. Lookups and mutations can be made
//! to fail to exercise error handling. All state sits behind mutexes so a single
//! guild can be shared across concurrent tasks.

use serenity::all::Role;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use thiserror::Error;

/// Role change requested from the fake guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleMutation {
    Added { user_id: u64, role_id: u64 },
    Removed { user_id: u64, role_id: u64 },
}

/// Failures the fake guild can be configured to produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FakeGuildError {
    #[error("Lookup of role {0} failed")]
    LookupFailed(u64),
    #[error("Role change for user {user_id} failed")]
    MutationFailed { user_id: u64 },
}

pub struct FakeGuild {
    pub guild_id: u64,
    roles: HashMap<u64, Role>,
    failing_lookups: HashSet<u64>,
    fail_mutations: bool,
    members: Mutex<HashMap<u64, HashSet<u64>>>,
    mutations: Mutex<Vec<RoleMutation>>,
    lookups: Mutex<Vec<u64>>,
}

impl FakeGuild {
    pub(crate) fn new(
        guild_id: u64,
        roles: HashMap<u64, Role>,
        members: HashMap<u64, HashSet<u64>>,
        failing_lookups: HashSet<u64>,
        fail_mutations: bool,
    ) -> Self {
        Self {
            guild_id,
            roles,
            failing_lookups,
            fail_mutations,
            members: Mutex::new(members),
            mutations: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Looks up a role by ID, recording the lookup.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role exists
    /// - `Ok(None)` - No such role
    /// - `Err(FakeGuildError::LookupFailed)` - Role was configured to fail lookups
    pub fn role(&self, role_id: u64) -> Result<Option<Role>, FakeGuildError> {
        self.lookups.lock().expect("lookups lock poisoned").push(role_id);

        if self.failing_lookups.contains(&role_id) {
            return Err(FakeGuildError::LookupFailed(role_id));
        }

        Ok(self.roles.get(&role_id).cloned())
    }

    /// Grants a role to a member, recording the mutation.
    pub fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), FakeGuildError> {
        if self.fail_mutations {
            return Err(FakeGuildError::MutationFailed { user_id });
        }

        self.members
            .lock()
            .expect("members lock poisoned")
            .entry(user_id)
            .or_default()
            .insert(role_id);
        self.mutations
            .lock()
            .expect("mutations lock poisoned")
            .push(RoleMutation::Added { user_id, role_id });

        Ok(())
    }

    /// Revokes a role from a member, recording the mutation.
    pub fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), FakeGuildError> {
        if self.fail_mutations {
            return Err(FakeGuildError::MutationFailed { user_id });
        }

        if let Some(roles) = self
            .members
            .lock()
            .expect("members lock poisoned")
            .get_mut(&user_id)
        {
            roles.remove(&role_id);
        }
        self.mutations
            .lock()
            .expect("mutations lock poisoned")
            .push(RoleMutation::Removed { user_id, role_id });

        Ok(())
    }

    /// Roles a member currently holds in the fake guild.
    pub fn member_roles(&self, user_id: u64) -> HashSet<u64> {
        self.members
            .lock()
            .expect("members lock poisoned")
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Every role change made so far, in order.
    pub fn mutations(&self) -> Vec<RoleMutation> {
        self.mutations.lock().expect("mutations lock poisoned").clone()
    }

    /// Every role ID looked up so far, in order.
    pub fn lookups(&self) -> Vec<u64> {
        self.lookups.lock().expect("lookups lock poisoned").clone()
    }
}
