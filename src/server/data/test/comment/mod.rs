use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, ModelTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_many;
mod get_by_task_with_author;

fn params(task_item_id: i32, author_id: i32, body: &str) -> CreateCommentParams {
    CreateCommentParams {
        body: body.to_string(),
        created_at: Utc::now(),
        task_item_id,
        author_id,
    }
}
