//! Business logic of the bot.
//!
//! - `permission` - classification of elevated roles
//! - `self_assign` - the self-assign grant/revoke decision and role mutation
//! - `audit` - delivery of audit entries to the log and the audit webhook
//! - `log_forward` - forwarding of warnings and errors to the audit webhook

pub mod audit;
pub mod log_forward;
pub mod permission;
pub mod self_assign;

pub use self_assign::SelfAssignService;

#[cfg(test)]
mod test;
