//! Error constructors

use super::types::{ApiError, ErrorKind};
use serde_json::Value;

impl ApiError {
    /// Create an error with an arbitrary status code and causes
    ///
    /// The code is not validated; picking a sensible status is the caller's job.
    #[must_use]
    pub fn new<M: Into<String>>(message: M, status_code: u16, causes: Vec<Value>) -> Self {
        Self {
            message: message.into(),
            status_code,
            causes,
        }
    }

    /// Create an error for a taxonomy bucket, without causes
    #[must_use]
    pub fn from_kind<M: Into<String>>(kind: ErrorKind, message: M) -> Self {
        Self::new(message, kind.status_code(), Vec::new())
    }

    /// Return a copy of this error with one more cause appended
    #[must_use]
    pub fn with_cause<C: Into<Value>>(mut self, cause: C) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// 400 Bad Request
    #[must_use]
    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::BadRequest, message)
    }

    /// 404 Not Found
    #[must_use]
    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::NotFound, message)
    }

    /// 401, the credentials were missing or wrong and the request may be retried
    #[must_use]
    pub fn unauthenticated<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::Unauthenticated, message)
    }

    /// 403, the caller is known but not allowed; retrying will not help
    #[must_use]
    pub fn unauthorized<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::Unauthorized, message)
    }

    /// 500 Internal Server Error
    ///
    /// When `err` is present its text becomes the only cause.
    #[must_use]
    pub fn internal_server<M: Into<String>>(
        message: M,
        err: Option<&dyn std::error::Error>,
    ) -> Self {
        let causes = err
            .map(|e| vec![Value::String(e.to_string())])
            .unwrap_or_default();
        Self::new(message, ErrorKind::InternalServer.status_code(), causes)
    }

    /// 409 Conflict
    #[must_use]
    pub fn processing_conflict<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::Conflict, message)
    }

    /// 422 Unprocessable Entity
    #[must_use]
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::from_kind(ErrorKind::Validation, message)
    }
}
