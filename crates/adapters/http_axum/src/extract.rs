//! Request extractors that report failures as [`ApiError`]s.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use fitbook_domain::error::ValidationError;

use crate::error::ApiError;

/// JSON body extractor.
///
/// Behaves like [`Json`] but turns a missing content type, malformed JSON,
/// a missing required field or a wrongly typed field into a `400` with the
/// usual `{"message": ...}` body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
        Ok(Self(value))
    }
}
