use sea_orm::DatabaseConnection;

use crate::server::{
    data::task::TaskRepository,
    error::AppError,
    model::task::{CreateTaskParams, Task, TaskWithOwner},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task for an existing user
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all tasks with their owners
    pub async fn get_all(&self) -> Result<Vec<TaskWithOwner>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.get_all_with_owner().await?)
    }

    /// Flips the completion flag
    /// Returns None if the task doesn't exist
    pub async fn toggle(&self, id: i32) -> Result<Option<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.toggle_completion(id).await?)
    }
}
