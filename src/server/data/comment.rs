//! Comment data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::INSERT_CHUNK_SIZE,
    model::{
        comment::{Comment, CommentWithAuthor, CreateCommentParams},
        user::User,
    },
};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a single comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error, including an unknown task or author id
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = Self::active_model(params).insert(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    /// Inserts many comments with multi-row INSERTs.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(DbErr)` - Database error; earlier chunks stay inserted unless the caller
    ///   runs inside a transaction
    pub async fn create_many(&self, params: Vec<CreateCommentParams>) -> Result<u64, DbErr> {
        let models: Vec<_> = params.into_iter().map(Self::active_model).collect();

        let mut inserted = 0;
        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            inserted += entity::prelude::Comment::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Gets the comments on a task, oldest id first, each with its author.
    ///
    /// An unknown task id yields an empty list.
    pub async fn get_by_task_with_author(
        &self,
        task_item_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::TaskItemId.eq(task_item_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Author of comment {} not found", comment.id))
                })?;

                Ok(CommentWithAuthor {
                    comment: Comment::from_entity(comment),
                    author: User::from_entity(author),
                })
            })
            .collect()
    }

    fn active_model(params: CreateCommentParams) -> entity::comment::ActiveModel {
        entity::comment::ActiveModel {
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(params.created_at),
            task_item_id: ActiveValue::Set(params.task_item_id),
            author_id: ActiveValue::Set(params.author_id),
            ..Default::default()
        }
    }
}
