use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::ErrorBody;

use crate::classifier::ClassifierError;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// Detail is logged and never sent to the caller.
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    error: msg,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR".into(),
                        error: "Error processing code".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        AppError::Internal(err.to_string())
    }
}
