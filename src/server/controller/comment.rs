use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentWithAuthorDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParams, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "Comments";

/// List the comments on a task.
///
/// Each comment is returned with its author. An unknown task id yields an empty list.
///
/// # Arguments
/// - `task_id` - Task id
///
/// # Returns
/// - `200 OK` - Comments ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tasks/{taskId}/comments",
    tag = COMMENT_TAG,
    params(
        ("taskId" = i32, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Comments with their authors", body = Vec<CommentWithAuthorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_by_task(task_id).await?;

    let comments_dto: Vec<_> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}

/// Add a comment to a task.
///
/// The body's `taskItemId` must match the path. `createdAt` defaults to now.
///
/// # Arguments
/// - `task_id` - Task id
/// - `payload` - Comment body, task id, author id and optional timestamp
///
/// # Returns
/// - `201 Created` - The created comment, with `Location: /tasks/{taskId}/comments/{id}`
/// - `400 Bad Request` - Path and body task ids differ
/// - `500 Internal Server Error` - Unknown task or author, or database error
#[utoipa::path(
    post,
    path = "/tasks/{taskId}/comments",
    tag = COMMENT_TAG,
    params(
        ("taskId" = i32, Path, description = "Task id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "TaskId mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCommentParams::from_dto(payload, Utc::now());
    let comment = CommentService::new(&state.db)
        .create_for_task(task_id, param)
        .await?;

    let location = format!("/tasks/{}/comments/{}", task_id, comment.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(comment.into_dto()),
    ))
}
