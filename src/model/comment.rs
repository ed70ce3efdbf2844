use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub task_item_id: i32,
    pub author_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub body: String,
    /// Defaults to the time the request is handled.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Must match the task id in the request path.
    pub task_item_id: i32,
    pub author_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthorDto {
    pub id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub task_item_id: i32,
    pub author_id: i32,
    pub author: UserDto,
}
