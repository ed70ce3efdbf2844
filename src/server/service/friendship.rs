use sea_orm::DatabaseConnection;

use crate::server::{data::friendship::FriendshipRepository, error::AppError, model::user::User};

pub struct FriendshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the friends of a user; empty when the user has none or does not exist
    pub async fn get_friends(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        let repo = FriendshipRepository::new(self.db);

        Ok(repo.get_friends(user_id).await?)
    }
}
