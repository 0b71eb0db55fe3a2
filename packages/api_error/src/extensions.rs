//! Boundary conversion of foreign failures into ApiError

use super::types::ApiError;

/// Convert any `Result` into an API result at the service boundary
pub trait ResultExt<T> {
    /// Map the error to a 500 carrying the original error text as its cause
    fn or_internal<M: Into<String>>(self, message: M) -> Result<T, ApiError>;

    /// Map the error to a 400 carrying the original error text as its cause
    fn or_bad_request<M: Into<String>>(self, message: M) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn or_internal<M: Into<String>>(self, message: M) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::internal_server(message, Some(&e)))
    }

    fn or_bad_request<M: Into<String>>(self, message: M) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::bad_request(message).with_cause(e.to_string()))
    }
}

/// Turn a missing value into a 404
pub trait OptionExt<T> {
    /// `None` becomes a not-found error with the given message
    fn or_not_found<M: Into<String>>(self, message: M) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found<M: Into<String>>(self, message: M) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::not_found(message))
    }
}
