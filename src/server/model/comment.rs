//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentWithAuthorDto, CreateCommentDto},
    server::model::user::User,
};

/// Comment posted by a user on a task.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub task_item_id: i32,
    pub author_id: i32,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            body: entity.body,
            created_at: entity.created_at,
            task_item_id: entity.task_item_id,
            author_id: entity.author_id,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            body: self.body,
            created_at: self.created_at,
            task_item_id: self.task_item_id,
            author_id: self.author_id,
        }
    }
}

/// Comment together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentWithAuthorDto {
        CommentWithAuthorDto {
            id: self.comment.id,
            body: self.comment.body,
            created_at: self.comment.created_at,
            task_item_id: self.comment.task_item_id,
            author_id: self.comment.author_id,
            author: self.author.into_dto(),
        }
    }
}

/// Parameters for creating a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub task_item_id: i32,
    pub author_id: i32,
}

impl CreateCommentParams {
    /// Builds parameters from a request body, stamping `now` when the client omitted
    /// a creation time.
    pub fn from_dto(dto: CreateCommentDto, now: DateTime<Utc>) -> Self {
        Self {
            body: dto.body,
            created_at: dto.created_at.unwrap_or(now),
            task_item_id: dto.task_item_id,
            author_id: dto.author_id,
        }
    }
}
