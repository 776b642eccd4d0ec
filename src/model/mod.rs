//! Domain models shared by the router, the self-assign service and the reporter.
//!
//! Serenity types are converted into these models at the platform boundary so the
//! decision logic never depends on gateway payload shapes.

pub mod audit;
pub mod invocation;
pub mod member;
pub mod outcome;
pub mod role;
pub mod self_assign;

pub use audit::{AuditEntry, Severity};
pub use invocation::{
    CommandInvocation, InteractionData, InvocationGuild, InvokingUser, ResponseState,
};
pub use member::GuildMember;
pub use outcome::{Outcome, OutcomeKind, Reply};
pub use role::GuildRole;
pub use self_assign::SelfAssignRequest;
