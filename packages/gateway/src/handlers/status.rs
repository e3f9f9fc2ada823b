use axum::Json;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    responses((status = 200, description = "Gateway is running", body = StatusResponse)),
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
