use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interviewer_core::SessionError;

/// A request-time failure, reported to the browser as `500 {"error": ...}`.
#[derive(Debug)]
pub struct ApiError(pub String);

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.0 }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
