//! JSON body extractor that reports failures as [`AppError`].

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON extractor that ignores the request `Content-Type` and decodes the raw body.
///
/// Unlike `axum::Json`, a missing or unexpected content type is not a rejection;
/// the only failure is a body that cannot be read or parsed, which surfaces as
/// [`AppError::Decode`] / [`AppError::BodyRead`] (500 with `{"message": ...}`).
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<Event>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}
