use crate::{
    error::AppError,
    model::{OutcomeKind, SelfAssignRequest, Severity},
    service::self_assign::{SelfAssignService, AUDIT_SOURCE},
    testing::{test_member, RecordingAudit, TEST_USER_ID},
};
use serenity::all::Permissions;
use test_utils::{builder::TestBuilder, guild::RoleMutation, serenity::create_test_role};

mod assign;
mod elevated;

const TARGET: u64 = 111;
const SOURCE_A: u64 = 222;
const SOURCE_B: u64 = 333;
const TARGET_COLOR: u32 = 0x1ABC9C;

fn request(token: &str) -> SelfAssignRequest {
    SelfAssignRequest::parse(token).unwrap()
}
