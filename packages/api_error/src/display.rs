//! Display and trait implementations for ApiError

use super::types::ApiError;
use serde_json::Value;
use std::fmt;

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message: {} - Status: {} - Causes: [",
            self.message, self.status_code
        )?;

        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cause {
                Value::String(s) => f.write_str(s)?,
                other => write!(f, "{other}")?,
            }
        }

        f.write_str("]")
    }
}

impl std::error::Error for ApiError {}
