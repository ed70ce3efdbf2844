use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, service::friendship::FriendshipService, state::AppState},
};

/// Tag for grouping friendship endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "Friends";

/// List a user's friends.
///
/// Returns the users on the far side of the user's outgoing friendship rows. An
/// unknown user id yields an empty list rather than 404.
///
/// # Arguments
/// - `id` - User id
///
/// # Returns
/// - `200 OK` - Friends ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}/friends",
    tag = FRIEND_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Friends of the user", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let friends = FriendshipService::new(&state.db).get_friends(id).await?;

    let friends_dto: Vec<_> = friends.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(friends_dto)))
}
