use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use brochure_contact::FieldError;
use serde_json::json;
use thiserror::Error;

/// Failure classes of the submission pipeline. Only validation failures carry
/// detail back to the caller; everything else stays generic on the wire.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("spam detected")]
    SpamDetected,

    #[error("invalid form data")]
    Validation(Vec<FieldError>),

    #[error("invalid request body")]
    Malformed,

    #[error("email configuration is missing")]
    ConfigurationMissing,

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::SpamDetected => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Spam detected" })),
            )
                .into_response(),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid form data", "details": details })),
            )
                .into_response(),
            AppError::Malformed => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request body" })),
            )
                .into_response(),
            AppError::ConfigurationMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Email configuration is missing" })),
            )
                .into_response(),
            AppError::Internal(e) => {
                tracing::error!("Error processing contact form: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
