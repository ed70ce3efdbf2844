//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on an existing task.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    task_item_id: i32,
    author_id: i32,
    body: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, task_item_id: i32, author_id: i32) -> Self {
        Self {
            db,
            task_item_id,
            author_id,
            body: format!("Comment {}", next_id()),
            created_at: Utc::now(),
        }
    }

    /// Sets the comment body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            task_item_id: ActiveValue::Set(self.task_item_id),
            author_id: ActiveValue::Set(self.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    task_item_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, task_item_id, author_id).build().await
}
