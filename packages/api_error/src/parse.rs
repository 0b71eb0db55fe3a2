//! JSON encoding and decoding of ApiError

use super::types::ApiError;
use std::str::FromStr;
use thiserror::Error;

/// Failure to decode a serialized [`ApiError`]
///
/// Malformed JSON and well-formed JSON of the wrong shape are reported the
/// same way; inspect the raw bytes if the difference matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The payload is not a JSON error object
    #[error("invalid json")]
    InvalidFormat,
}

impl ApiError {
    /// Decode an error from its JSON form
    ///
    /// `message` and `statuscode` are required, `causes` may be `null` or absent.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        serde_json::from_slice(bytes).map_err(|_| ParseError::InvalidFormat)
    }

    /// Encode as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode as JSON bytes, ready for a response body
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl FromStr for ApiError {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}
