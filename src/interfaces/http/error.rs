use crate::error::StorefrontError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        match self {
            StorefrontError::MethodNotAllowed => {
                error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            StorefrontError::InvalidOrderIntent(_) | StorefrontError::InvalidBody(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            StorefrontError::ProductNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            // Already logged by the relay; the cause stays server-side.
            StorefrontError::UpstreamRelay(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            other => {
                error!(error = %other, "Request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
