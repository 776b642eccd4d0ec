use serenity::all::Role;
use std::collections::{HashMap, HashSet};

use crate::{context::TestContext, guild::FakeGuild};

/// Guild ID used when a test does not set one.
pub const DEFAULT_GUILD_ID: u64 = 315710189762248705;

/// Builder for creating test contexts around a fake guild.
///
/// Provides a fluent interface for configuring which roles exist, which roles each
/// member holds, and which calls should fail. Call `build()` to create the context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, serenity::create_test_role};
///
/// let test = TestBuilder::new()
///     .with_role(create_test_role(111, "Tag", 0, 1, 0))
///     .with_role(create_test_role(222, "Verified", 0, 2, 0))
///     .with_member(42, &[222])
///     .build();
/// ```
pub struct TestBuilder {
    guild_id: u64,
    roles: HashMap<u64, Role>,
    members: HashMap<u64, HashSet<u64>>,
    failing_lookups: HashSet<u64>,
    fail_mutations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty guild.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no roles or members
    pub fn new() -> Self {
        Self {
            guild_id: DEFAULT_GUILD_ID,
            roles: HashMap::new(),
            members: HashMap::new(),
            failing_lookups: HashSet::new(),
            fail_mutations: false,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Adds a role to the guild.
    ///
    /// # Arguments
    /// - `role` - Serenity role, typically from `serenity::create_test_role`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role.id.get(), role);
        self
    }

    /// Adds a member holding the given roles.
    pub fn with_member(mut self, user_id: u64, role_ids: &[u64]) -> Self {
        self.members
            .insert(user_id, role_ids.iter().copied().collect());
        self
    }

    /// Makes every lookup of `role_id` fail as if the Discord API call errored.
    pub fn with_failing_lookup(mut self, role_id: u64) -> Self {
        self.failing_lookups.insert(role_id);
        self
    }

    /// Makes every role grant and revoke fail.
    pub fn with_failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `TestContext` - Context holding the configured fake guild
    pub fn build(self) -> TestContext {
        TestContext::new(FakeGuild::new(
            self.guild_id,
            self.roles,
            self.members,
            self.failing_lookups,
            self.fail_mutations,
        ))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
