use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, TaskDto, TaskWithOwnerDto},
    },
    server::{
        error::AppError, model::task::CreateTaskParams, service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "Tasks";

/// List all tasks.
///
/// Each task is returned with its owning user.
///
/// # Returns
/// - `200 OK` - Every task with its owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Tasks with their owners", body = Vec<TaskWithOwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskService::new(&state.db).get_all().await?;

    let tasks_dto: Vec<_> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks_dto)))
}

/// Create a task.
///
/// `isCompleted` defaults to `false` when omitted. The owning user must exist.
///
/// # Arguments
/// - `payload` - Title, completion flag and owner id
///
/// # Returns
/// - `201 Created` - The created task, with `Location: /tasks/{id}`
/// - `500 Internal Server Error` - Unknown owner or database error
#[utoipa::path(
    post,
    path = "/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Successfully created task", body = TaskDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateTaskParams::from_dto(payload);
    let task = TaskService::new(&state.db).create(param).await?;

    let location = format!("/tasks/{}", task.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(task.into_dto()),
    ))
}

/// Flip a task's completion flag.
///
/// # Arguments
/// - `id` - Task id
///
/// # Returns
/// - `200 OK` - The task after the flip
/// - `404 Not Found` - No task with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/tasks/{id}/toggle",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task with flipped completion flag", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskService::new(&state.db)
        .toggle(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}
