//! Self-assign Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. The bot keeps no state
//! of its own, so instead of a database these utilities stand in for the Discord guild
//! the bot talks to.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring the fake guild's roles and members
//! - **TestContext**: Test environment holding the configured `FakeGuild`
//! - **serenity**: Factories for Serenity API objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, serenity::create_test_role};
//!
//! #[tokio::test]
//! async fn test_grant() {
//!     let test = TestBuilder::new()
//!         .with_role(create_test_role(111, "Member", 0x00FF00, 1, 0))
//!         .with_member(42, &[])
//!         .build();
//!
//!     // Hand `&test.guild` to the code under test, then inspect
//!     // `test.guild.mutations()` and `test.guild.member_roles(42)`.
//! }
//! ```

pub mod builder;
pub mod context;
pub mod guild;
pub mod serenity;
