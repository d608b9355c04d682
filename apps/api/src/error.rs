use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use auditdesk_core::AppError;
use serde::Serialize;
use tracing::error;

/// Fixed body for 500 responses. Internal detail stays in the logs.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error payload, matching the dashboard client's expectations.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    success: bool,
    error: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.0 {
            AppError::Internal(detail) => {
                error!(%detail, "request failed with an internal error");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            other => other.to_string(),
        };

        let payload = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
