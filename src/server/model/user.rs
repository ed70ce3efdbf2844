//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UserDetailDto, UserDto, UserWithTasksDto},
    server::model::task::{Task, TaskWithComments},
};

/// Application user identified by a unique username.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// User together with the tasks they own.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithTasks {
    pub user: User,
    pub tasks: Vec<Task>,
}

impl UserWithTasks {
    pub fn into_dto(self) -> UserWithTasksDto {
        UserWithTasksDto {
            id: self.user.id,
            username: self.user.username,
            tasks: self.tasks.into_iter().map(Task::into_dto).collect(),
        }
    }
}

/// User with owned tasks and every comment on those tasks.
///
/// Returned by the single-user lookup, which loads the whole ownership tree.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub user: User,
    pub tasks: Vec<TaskWithComments>,
}

impl UserDetail {
    pub fn into_dto(self) -> UserDetailDto {
        UserDetailDto {
            id: self.user.id,
            username: self.user.username,
            tasks: self
                .tasks
                .into_iter()
                .map(TaskWithComments::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
        }
    }
}
