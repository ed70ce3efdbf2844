use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{comment, friendship, root, task, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "CRUD over users, tasks, comments and friendships"
    ),
    tags(
        (name = "Root", description = "Banner and health"),
        (name = "Users", description = "User accounts and their tasks"),
        (name = "Tasks", description = "Tasks and completion"),
        (name = "Comments", description = "Comments on tasks"),
        (name = "Friends", description = "Mutual friendships between users")
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// Routes are registered through `OpenApiRouter` so the OpenAPI document is collected
/// from the handler annotations. When `docs_enabled` is set the document is served at
/// `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`.
pub fn router(docs_enabled: bool) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::root))
        .routes(routes!(root::health))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user))
        .routes(routes!(friendship::get_friends))
        .routes(routes!(task::get_tasks, task::create_task))
        .routes(routes!(task::toggle_task))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .split_for_parts();

    let router = if docs_enabled {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
