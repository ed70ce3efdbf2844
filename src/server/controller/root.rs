use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping service-level endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "Root";

const BANNER: &str = "Taskboard API: users, tasks, comments and friendships. See /swagger-ui";

/// Plain-text banner describing the API.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API banner", body = String, content_type = "text/plain")
    ),
)]
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, BANNER)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
