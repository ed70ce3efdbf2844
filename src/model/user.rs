use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::task::{TaskDto, TaskWithCommentsDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
}

/// User as returned by the listing endpoint, with owned tasks.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserWithTasksDto {
    pub id: i32,
    pub username: String,
    pub tasks: Vec<TaskDto>,
}

/// User with owned tasks and the comments on each task.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    pub id: i32,
    pub username: String,
    pub tasks: Vec<TaskWithCommentsDto>,
}
