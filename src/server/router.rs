use axum::{routing::post, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::todo_item::*, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", description = "CRUD API for managing to-do items"),
    tags((name = "todo", description = "To-do item management"))
)]
struct ApiDoc;

/// Builds the application router with OpenAPI documentation and request tracing.
///
/// Create and update are also reachable with a trailing slash (`/v1/todo/`).
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_all_todo_items))
        .routes(routes!(get_todo_item_by_id, delete_todo_item))
        .routes(routes!(create_todo_item, update_todo_item))
        .split_for_parts();

    router
        .route("/v1/todo/", post(create_todo_item).put(update_todo_item))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)),
        )
}
