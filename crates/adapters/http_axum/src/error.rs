//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fitbook_domain::error::{FitbookError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`FitbookError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(FitbookError);

impl From<FitbookError> for ApiError {
    fn from(err: FitbookError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FitbookError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            FitbookError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            FitbookError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            FitbookError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
