use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picus_core::item::{classify_error, PicusError, INTERNAL_SERVER_ERROR};
use serde_json::json;

/// Error returned by the item handlers.
///
/// Rendered as `{"error": "<message>"}` with the status and wording chosen
/// by [`classify_error`]. The full detail only goes to the log.
#[derive(Debug)]
pub struct AppError(pub PicusError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.0.log();

        let classified = classify_error(&self.0);
        let status =
            StatusCode::from_u16(classified.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        error_response(status, classified.message)
    }
}

impl From<PicusError> for AppError {
    fn from(err: PicusError) -> Self {
        Self(err)
    }
}

/// JSON error body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// Response for a handler that panicked.
pub fn internal_error(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(error = %detail, "Internal server error");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
