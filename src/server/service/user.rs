use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User, UserDetail, UserWithTasks},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all users with their tasks
    pub async fn get_all(&self) -> Result<Vec<UserWithTasks>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all_with_tasks().await?)
    }

    /// Gets a user with tasks and comments, or `None` if the id is unknown
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserDetail>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_detail_by_id(id).await?)
    }
}
