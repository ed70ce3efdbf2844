use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CommentWithAuthor, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to the task named in the request path.
    ///
    /// # Arguments
    /// - `task_id`: Task id taken from the path
    /// - `params`: Comment to create; its `task_item_id` must equal `task_id`
    ///
    /// # Returns
    /// - `Ok(Comment)`: The created comment
    /// - `Err(AppError::BadRequest)`: Path and body task ids differ
    /// - `Err(AppError::DbErr)`: Unknown task or author, or other database error
    pub async fn create_for_task(
        &self,
        task_id: i32,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        if task_id != params.task_item_id {
            return Err(AppError::BadRequest("TaskId mismatch.".to_string()));
        }

        let repo = CommentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets the comments on a task with their authors
    pub async fn get_by_task(&self, task_id: i32) -> Result<Vec<CommentWithAuthor>, AppError> {
        let repo = CommentRepository::new(self.db);

        Ok(repo.get_by_task_with_author(task_id).await?)
    }
}
