//! Small stateless helpers shared across services
//!
//! - [`date`] - RFC 3339 timestamps in UTC
//! - [`misc`] - slice membership checks

pub mod date;
pub mod misc;

pub use date::{format_api_date, now_utc, now_utc_string, parse_api_date, API_DATE_LAYOUT};
pub use misc::{slice_contains_string, slice_contains_string_fold};
