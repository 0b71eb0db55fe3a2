//! Core error types and definitions

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Classified, causally annotated application error
///
/// Fields are private; the value cannot be changed once built. The serialized
/// form is `{"message": .., "statuscode": .., "causes": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable message
    #[serde(rename = "message")]
    pub(crate) message: String,
    /// HTTP status code, not range checked
    #[serde(rename = "statuscode")]
    pub(crate) status_code: u16,
    /// Opaque cause descriptors, `null` and missing both read as empty
    #[serde(rename = "causes", default, deserialize_with = "null_as_empty")]
    pub(crate) causes: Vec<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ApiError {
    /// Error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw status code
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Ordered cause descriptors, empty when none were attached
    #[must_use]
    pub fn causes(&self) -> &[Value] {
        &self.causes
    }

    /// Status as an [`http::StatusCode`], `None` when outside `100..=999`
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }

    /// Taxonomy bucket for the status code
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.status_code)
    }
}

/// Error taxonomy keyed by HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// 400
    #[error("Bad request")]
    BadRequest,

    /// 401, credentials missing or wrong; the caller may retry
    #[error("Unauthenticated")]
    Unauthenticated,

    /// 403, access permanently denied
    #[error("Unauthorized")]
    Unauthorized,

    /// 404
    #[error("Not found")]
    NotFound,

    /// 409
    #[error("Processing conflict")]
    Conflict,

    /// 422
    #[error("Validation failed")]
    Validation,

    /// 500
    #[error("Internal server error")]
    InternalServer,

    /// Any status outside the taxonomy
    #[error("Status {0}")]
    Other(u16),
}

impl ErrorKind {
    /// Bucket a raw status code
    #[must_use]
    pub fn from_status(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthenticated,
            403 => Self::Unauthorized,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::Validation,
            500 => Self::InternalServer,
            _ => Self::Other(code),
        }
    }

    /// Status code carried by errors of this kind
    #[must_use]
    pub fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST.as_u16(),
            // 401 is the HTTP "Unauthorized" status but means "not authenticated"
            Self::Unauthenticated => StatusCode::UNAUTHORIZED.as_u16(),
            Self::Unauthorized => StatusCode::FORBIDDEN.as_u16(),
            Self::NotFound => StatusCode::NOT_FOUND.as_u16(),
            Self::Conflict => StatusCode::CONFLICT.as_u16(),
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            Self::InternalServer => StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            Self::Other(code) => code,
        }
    }

    /// Whether a client may retry the same request after fixing credentials
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Result type alias using [`ApiError`]
pub type Result<T> = std::result::Result<T, ApiError>;
