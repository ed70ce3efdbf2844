//! Task domain models and parameters.

use crate::{
    model::task::{CreateTaskDto, TaskDto, TaskWithCommentsDto, TaskWithOwnerDto},
    server::model::{comment::Comment, user::User},
};

/// Task owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub is_completed: bool,
    /// Owning user; deleting the user deletes the task.
    pub user_id: i32,
}

impl Task {
    /// Converts an entity model to a task domain model at the repository boundary.
    pub fn from_entity(entity: entity::task_item::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            is_completed: entity.is_completed,
            user_id: entity.user_id,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            is_completed: self.is_completed,
            user_id: self.user_id,
        }
    }
}

/// Task together with its owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithOwner {
    pub task: Task,
    pub owner: User,
}

impl TaskWithOwner {
    pub fn into_dto(self) -> TaskWithOwnerDto {
        TaskWithOwnerDto {
            id: self.task.id,
            title: self.task.title,
            is_completed: self.task.is_completed,
            user_id: self.task.user_id,
            user: self.owner.into_dto(),
        }
    }
}

/// Task together with the comments posted on it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithComments {
    pub task: Task,
    pub comments: Vec<Comment>,
}

impl TaskWithComments {
    pub fn into_dto(self) -> TaskWithCommentsDto {
        TaskWithCommentsDto {
            id: self.task.id,
            title: self.task.title,
            is_completed: self.task.is_completed,
            user_id: self.task.user_id,
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Parameters for creating a task.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub title: String,
    pub is_completed: bool,
    pub user_id: i32,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Self {
        Self {
            title: dto.title,
            is_completed: dto.is_completed,
            user_id: dto.user_id,
        }
    }
}
