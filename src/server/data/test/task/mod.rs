use crate::server::{data::task::TaskRepository, model::task::CreateTaskParams};
use sea_orm::{DbErr, EntityTrait, ModelTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_with_owner;
mod toggle_completion;
