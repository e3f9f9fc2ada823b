use axum::Json;
use axum::extract::State;
use common::{ClassifyRequest, ClassifyResponse, ErrorBody};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::state::AppState;

/// Classify a code submission.
///
/// Runs the external classifier once and returns its trimmed output.
#[utoipa::path(
    post,
    path = "/classify",
    tag = "Classification",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Delimiter-separated candidate problems", body = ClassifyResponse),
        (status = 400, description = "Missing or malformed `code` (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Classifier failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip_all, fields(code_bytes = tracing::field::Empty))]
pub async fn classify(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let code = payload
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::Validation("No code provided".into()))?;
    tracing::Span::current().record("code_bytes", code.len());

    let problem_name = state.classifier.classify(&code).await?;
    info!(problem_name = %problem_name, "Submission classified");

    Ok(Json(ClassifyResponse { problem_name }))
}
