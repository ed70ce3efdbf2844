//! User data repository for database operations.
//!
//! Provides user creation and the eager-loading queries behind the user
//! endpoints: the listing loads each user's tasks and the single-user lookup loads
//! tasks together with their comments.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, LoaderTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::{
    comment::Comment,
    task::{Task, TaskWithComments},
    user::{CreateUserParams, User, UserDetail, UserWithTasks},
};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Checks whether the user table holds any row.
    ///
    /// Used by the seeder to stay idempotent.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find().count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets every user, ordered by id, with the tasks each one owns.
    pub async fn get_all_with_tasks(&self) -> Result<Vec<UserWithTasks>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let tasks = users
            .load_many(
                entity::prelude::TaskItem::find().order_by_asc(entity::task_item::Column::Id),
                self.db,
            )
            .await?;

        Ok(users
            .into_iter()
            .zip(tasks)
            .map(|(user, tasks)| UserWithTasks {
                user: User::from_entity(user),
                tasks: tasks.into_iter().map(Task::from_entity).collect(),
            })
            .collect())
    }

    /// Gets a user with their tasks and the comments on each task.
    ///
    /// # Returns
    /// - `Ok(Some(UserDetail))` - User found, with the full ownership tree
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_detail_by_id(&self, id: i32) -> Result<Option<UserDetail>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tasks = user
            .find_related(entity::prelude::TaskItem)
            .order_by_asc(entity::task_item::Column::Id)
            .all(self.db)
            .await?;

        let comments = tasks
            .load_many(
                entity::prelude::Comment::find().order_by_asc(entity::comment::Column::Id),
                self.db,
            )
            .await?;

        let tasks = tasks
            .into_iter()
            .zip(comments)
            .map(|(task, comments)| TaskWithComments {
                task: Task::from_entity(task),
                comments: comments.into_iter().map(Comment::from_entity).collect(),
            })
            .collect();

        Ok(Some(UserDetail {
            user: User::from_entity(user),
            tasks,
        }))
    }
}
