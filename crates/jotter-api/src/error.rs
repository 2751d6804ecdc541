//! HTTP error responses.
//!
//! Every error body carries a `detail` field: a message string for 404/500,
//! or a list of per-field entries for 422.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use jotter_core::FieldViolation;

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const BODY_TOO_LARGE: &str = "Request body too large";

const NOT_AN_OBJECT: &str = "Input should be a valid dictionary or object to extract fields from";

/// One entry of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Location of the offending value, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorDetail {
    fn at(path: Vec<String>, msg: impl Into<String>, kind: &str) -> Self {
        let mut loc = vec!["body".to_string()];
        loc.extend(path);
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::at(vec![field.to_string()], "Field required", "missing")
    }

    pub(crate) fn not_a_string(path: Vec<String>) -> Self {
        Self::at(path, "Input should be a valid string", "string_type")
    }

    pub(crate) fn not_an_object() -> Self {
        Self::at(Vec::new(), NOT_AN_OBJECT, "model_attributes_type")
    }

    fn json_invalid() -> Self {
        Self::at(Vec::new(), "JSON decode error", "json_invalid")
    }
}

impl From<FieldViolation> for ErrorDetail {
    fn from(v: FieldViolation) -> Self {
        Self::at(vec![v.field], v.message, &v.kind)
    }
}

/// Body of a 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<ErrorDetail>,
}

/// Body of a 404, 500 or 503 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<ErrorDetail>),
    #[error("{0}")]
    NotFound(String),
    /// A body rejection that is not a client validation problem (e.g. too large).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error(transparent)]
    Internal(jotter_core::Error),
}

impl ApiError {
    pub fn note_not_found() -> Self {
        ApiError::NotFound(NOTE_NOT_FOUND.to_string())
    }
}

impl From<jotter_core::Error> for ApiError {
    fn from(err: jotter_core::Error) -> Self {
        match err {
            jotter_core::Error::NoteNotFound(_) => ApiError::note_not_found(),
            other => ApiError::Internal(other),
        }
    }
}

impl From<Vec<FieldViolation>> for ApiError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations.into_iter().map(ErrorDetail::from).collect())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = match &rejection {
            JsonRejection::JsonSyntaxError(_) => ErrorDetail::json_invalid(),
            JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonDataError(_) => {
                ErrorDetail::not_an_object()
            }
            _ if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return ApiError::Rejected {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    message: BODY_TOO_LARGE.to_string(),
                }
            }
            _ => {
                return ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            }
        };
        ApiError::Validation(vec![detail])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorBody { detail }),
            )
                .into_response(),
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageBody { detail: msg })).into_response()
            }
            ApiError::Rejected { status, message } => {
                (status, Json(MessageBody { detail: message })).into_response()
            }
            ApiError::Internal(err) => {
                error!(subsystem = "api", error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        detail: INTERNAL_SERVER_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
