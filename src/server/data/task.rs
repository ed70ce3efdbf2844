//! Task data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::{
    task::{CreateTaskParams, Task, TaskWithOwner},
    user::User,
};

/// Repository providing database operations for tasks.
pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new task.
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(DbErr)` - Database error, including an unknown owner id
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, DbErr> {
        let entity = entity::task_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            is_completed: ActiveValue::Set(params.is_completed),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    /// Gets every task, ordered by id, with its owner.
    pub async fn get_all_with_owner(&self) -> Result<Vec<TaskWithOwner>, DbErr> {
        let rows = entity::prelude::TaskItem::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::task_item::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(task, owner)| {
                // The foreign key guarantees the owner row exists.
                let owner = owner.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Owner of task {} not found", task.id))
                })?;

                Ok(TaskWithOwner {
                    task: Task::from_entity(task),
                    owner: User::from_entity(owner),
                })
            })
            .collect()
    }

    /// Flips a task's completion flag.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - The task after the flip
    /// - `Ok(None)` - No task with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn toggle_completion(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let Some(task) = entity::prelude::TaskItem::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let is_completed = !task.is_completed;
        let mut active: entity::task_item::ActiveModel = task.into();
        active.is_completed = ActiveValue::Set(is_completed);

        let updated = active.update(self.db).await?;

        Ok(Some(Task::from_entity(updated)))
    }
}
