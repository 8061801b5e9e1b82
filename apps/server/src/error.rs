//! Core error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use investra_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning a core error into an HTTP response.
///
/// Client-fixable failures (bad payloads, bad token) map to 400; everything
/// else surfaces as 500 with an opaque message, matching the gateway's
/// contract of never interpreting collaborator failures for the caller.
pub struct ApiError(Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) | Error::Unauthorized(_) | Error::Scoring(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        (status, self.0.to_string()).into_response()
    }
}
