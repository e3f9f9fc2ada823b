use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::classify::*;
use crate::handlers::editor::editor_page;
use crate::handlers::status::*;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(classify))
        .routes(routes!(status))
}

/// Routes left out of the OpenAPI document.
pub fn page_routes() -> axum::Router<AppState> {
    axum::Router::new().route("/", get(editor_page))
}
