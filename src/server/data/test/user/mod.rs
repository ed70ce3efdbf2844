use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod any_exists;
mod create;
mod get_all_with_tasks;
mod get_detail_by_id;
