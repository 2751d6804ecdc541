//! Request extractors that reject with [`ApiError`] instead of axum's plain-text rejections.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use jotter_core::{FieldViolation, NoteInput};

use crate::error::ErrorDetail;
use crate::ApiError;

/// Field-level checks run after a body deserializes.
pub trait Validate {
    /// Top-level body fields that must be present.
    const REQUIRED_FIELDS: &'static [&'static str];

    fn validate(&self) -> Result<(), Vec<FieldViolation>>;
}

impl Validate for NoteInput {
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content"];

    fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        NoteInput::validate(self)
    }
}

/// JSON body that has been deserialized and validated.
///
/// Malformed bodies and failed checks both reject with 422.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state).await?;
        let value = decode_body::<T>(raw)?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Turn a parsed JSON document into `T`.
///
/// Shape problems are reported against the path serde was visiting, so
/// the `loc` of each detail never depends on error message wording.
fn decode_body<T>(raw: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let Value::Object(fields) = &raw else {
        return Err(ApiError::Validation(vec![ErrorDetail::not_an_object()]));
    };

    let missing: Vec<ErrorDetail> = T::REQUIRED_FIELDS
        .iter()
        .filter(|field| !fields.contains_key(**field))
        .map(|field| ErrorDetail::missing(field))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing));
    }

    serde_path_to_error::deserialize(raw).map_err(|err| {
        let path: Vec<String> = err.path().iter().map(|segment| segment.to_string()).collect();
        let detail = if path.is_empty() {
            ErrorDetail::not_an_object()
        } else {
            ErrorDetail::not_a_string(path)
        };
        ApiError::Validation(vec![detail])
    })
}

/// Note identifier from the `{id}` path segment.
///
/// A segment that is not a UUID cannot name a stored note, so it rejects
/// with 404 rather than 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::note_not_found())?;
        Uuid::parse_str(&raw)
            .map(NoteId)
            .map_err(|_| ApiError::note_not_found())
    }
}
