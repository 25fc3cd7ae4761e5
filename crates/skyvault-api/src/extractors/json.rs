//! JSON body extraction with uniform error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use skyvault_core::error::AppError;

use crate::error::ApiError;

/// `Json<T>` wrapper whose rejection uses the standard error body.
///
/// Axum's own `Json` rejects malformed bodies with a plain-text
/// response. Wrapping it keeps every error produced by this API inside
/// the same JSON envelope, and maps body problems to a 400.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::from(AppError::validation(rejection.body_text()))),
        }
    }
}
