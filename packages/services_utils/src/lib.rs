//! # services_utils
//!
//! Shared building blocks for HTTP services, re-exported from one crate.
//!
//! ## Components
//!
//! - [`api_error`] - `ApiError` with an HTTP status taxonomy and JSON wire form
//! - [`date`] / [`misc`] - RFC 3339 UTC timestamps and string-slice helpers
//! - [`enums`] (feature `enums`) - index/value enumerations with lookups
//! - [`logger`] (feature `logger`) - leveled JSON logger with a bounded
//!   buffer of recent entries
//!
//! ```toml
//! [dependencies]
//! services_utils = { version = "0.1", default-features = false, features = ["logger"] }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use services_utils::{ApiError, Field, Logger};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = Logger::from_env()?;
//! let err = ApiError::not_found("user 42 not found");
//! logger.warn(err.message(), &[Field::new("status", err.status_code())]);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use services_utils_api_error as api_error;
pub use services_utils_api_error::{api_bail, api_err, ApiError, ErrorKind, OptionExt, ResultExt};

pub use services_utils_common::{date, misc};
pub use services_utils_common::{
    format_api_date, now_utc, now_utc_string, parse_api_date, slice_contains_string,
    slice_contains_string_fold, API_DATE_LAYOUT,
};

#[cfg(feature = "enums")]
#[cfg_attr(docsrs, doc(cfg(feature = "enums")))]
pub use services_utils_enums as enums;

#[cfg(feature = "enums")]
#[cfg_attr(docsrs, doc(cfg(feature = "enums")))]
pub use services_utils_enums::{Enum, EnumItem};

#[cfg(feature = "logger")]
#[cfg_attr(docsrs, doc(cfg(feature = "logger")))]
pub use services_utils_logger as logger;

#[cfg(feature = "logger")]
#[cfg_attr(docsrs, doc(cfg(feature = "logger")))]
pub use services_utils_logger::{
    debugf, errorf, infof, warnf, Field, Level, LogBuffer, LogEntry, Logger, LoggerConfig,
    LoggerError,
};
