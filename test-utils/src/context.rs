use crate::guild::FakeGuild;

/// Test environment created by `TestBuilder`.
///
/// Holds the fake guild standing in for Discord. Tests hand `&guild` to the code
/// under test and inspect it afterwards to see which role changes were made.
pub struct TestContext {
    /// The configured fake guild.
    pub guild: FakeGuild,
}

impl TestContext {
    pub(crate) fn new(guild: FakeGuild) -> Self {
        Self { guild }
    }

    pub fn guild_id(&self) -> u64 {
        self.guild.guild_id
    }
}
