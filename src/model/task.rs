use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comment::CommentDto, user::UserDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub title: String,
    pub is_completed: bool,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithOwnerDto {
    pub id: i32,
    pub title: String,
    pub is_completed: bool,
    pub user_id: i32,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCommentsDto {
    pub id: i32,
    pub title: String,
    pub is_completed: bool,
    pub user_id: i32,
    pub comments: Vec<CommentDto>,
}
