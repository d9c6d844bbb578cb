//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use serbisyo_domain::error::SerbisyoError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SerbisyoError`] to an HTTP response with appropriate status code.
pub struct ApiError(SerbisyoError);

impl From<SerbisyoError> for ApiError {
    fn from(err: SerbisyoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SerbisyoError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SerbisyoError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SerbisyoError::Directory(err) => {
                tracing::error!(error = %err, "directory error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
