pub mod role;

pub use role::{GuildRoleRepository, SerenityRoleRepository};
