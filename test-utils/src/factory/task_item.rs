//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let task = TaskItemFactory::new(&db, user.id)
///     .title("Ship it")
///     .completed(true)
///     .build()
///     .await?;
/// ```
pub struct TaskItemFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    is_completed: bool,
}

impl<'a> TaskItemFactory<'a> {
    /// Creates a new TaskItemFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Task {id}"`
    /// - is_completed: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: format!("Task {}", next_id()),
            is_completed: false,
        }
    }

    /// Sets the task title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the completion flag.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task_item::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown owner)
    pub async fn build(self) -> Result<entity::task_item::Model, DbErr> {
        entity::task_item::ActiveModel {
            title: ActiveValue::Set(self.title),
            is_completed: ActiveValue::Set(self.is_completed),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open task with default values for the given owner.
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::task_item::Model, DbErr> {
    TaskItemFactory::new(db, user_id).build().await
}
