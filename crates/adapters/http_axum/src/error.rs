//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lumen_domain::error::LumenError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LumenError`] to an HTTP response with appropriate status code.
pub struct ApiError(LumenError);

impl From<LumenError> for ApiError {
    fn from(err: LumenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Device-level failures never get here: the dispatcher folds them into
        // a `CommandResult` returned with 200.
        let (status, message) = match &self.0 {
            LumenError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            err => {
                tracing::error!(error = %err.detail(), "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
