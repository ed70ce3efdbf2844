use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDetailDto, UserDto, UserWithTasksDto},
    },
    server::{
        error::AppError, model::user::CreateUserParams, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "Users";

/// List all users.
///
/// Each user is returned with the tasks they own.
///
/// # Returns
/// - `200 OK` - Every user with their tasks
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users with their tasks", body = Vec<UserWithTasksDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a single user.
///
/// Returns the user with their tasks, and each task with its comments.
///
/// # Arguments
/// - `id` - User id
///
/// # Returns
/// - `200 OK` - User with tasks and comments
/// - `404 Not Found` - No user with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User with tasks and comments", body = UserDetailDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a user.
///
/// Usernames are unique; a duplicate is rejected by the database.
///
/// # Arguments
/// - `payload` - Username of the new user
///
/// # Returns
/// - `201 Created` - The created user, with `Location: /users/{id}`
/// - `500 Internal Server Error` - Duplicate username or database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParams::from_dto(payload);
    let user = UserService::new(&state.db).create(param).await?;

    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user.into_dto()),
    ))
}
