pub mod classifier;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Json;
use axum::http::{Method, header};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LeetCode Problem Classifier API",
        version = "1.0.0",
        description = "Gateway that forwards code submissions to an external classifier"
    ),
    tags(
        (name = "Classification", description = "Classify code submissions"),
        (name = "Status", description = "Gateway health"),
    ),
)]
struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age));

    if config.allow_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    match config.origins() {
        Ok(origins) => layer.allow_origin(origins),
        Err(e) => {
            tracing::error!(error = %e, "Rejecting all cross-origin requests");
            layer
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    let api_json = Json(api.clone());

    router
        .merge(routes::page_routes())
        .with_state(state)
        .route(
            "/api-docs/openapi.json",
            get(move || std::future::ready(api_json.clone())),
        )
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors)
}
