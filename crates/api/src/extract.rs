//! Request extractors that report rejections through [`AppError`].
//!
//! axum's stock `Json` and `Path` answer malformed input with a plain-text
//! 4xx. These wrappers keep every client error inside the `{error, code}`
//! envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// A body whose fields have the wrong shape is a validation failure (400
/// `VALIDATION_ERROR`). A body that is not JSON at all is a 400
/// `BAD_REQUEST`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        validate_input(&value)?;
        Ok(ValidJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Core(CoreError::Validation(err.body_text()))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(IdPath(id))
    }
}
