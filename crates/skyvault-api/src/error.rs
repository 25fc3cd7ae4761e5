//! Error handling for the API layer.
//!
//! Converts [`AppError`] values coming out of the service layer into
//! HTTP responses with a uniform JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use skyvault_core::error::{AppError, ErrorKind};

/// Response-side wrapper for [`AppError`].
///
/// Handlers return `Result<_, ApiError>`; the `?` operator lifts any
/// `AppError` through the [`From`] impl below.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    /// Stable machine-readable error code.
    error: String,
    /// Human-readable description.
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(error = %err, kind = %err.kind, "Request failed");
        }

        let body = ApiErrorResponse {
            error: code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_status_mapping() {
        let cases = [
            (AppError::validation("bad input"), StatusCode::BAD_REQUEST),
            (AppError::not_found("missing"), StatusCode::NOT_FOUND),
            (AppError::conflict("duplicate"), StatusCode::CONFLICT),
            (
                AppError::service_unavailable("not ready"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::database("query failed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("unexpected"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
