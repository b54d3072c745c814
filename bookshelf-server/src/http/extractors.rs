//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation`, so malformed input always
//! surfaces as a 400 with the JSON error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and parse an integer book id from the path.
///
/// A missing or undecodable segment is reported the same way as a
/// non-numeric one.
pub struct ValidId(pub i64);

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let id = id.parse::<i64>().map_err(|_| invalid_id())?;

        Ok(Self(id))
    }
}

/// JSON body extractor that ignores `Content-Type`.
///
/// Unlike `axum::Json`, every decode failure (syntax, missing field, wrong
/// type) maps to 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::InvalidBody {
                reason: e.body_text(),
            })
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::InvalidBody {
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}
