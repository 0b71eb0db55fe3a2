//! Date helpers producing the API wire format
//!
//! All timestamps on the wire are RFC 3339 in UTC with second precision and a
//! `Z` suffix, e.g. `2024-05-01T12:30:00Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use services_utils_api_error::ApiError;

/// `chrono` format string equivalent to the API date layout
pub const API_DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current time in UTC
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current time in UTC formatted with the API date layout
#[must_use]
pub fn now_utc_string() -> String {
    format_api_date(&now_utc())
}

/// Format a UTC timestamp with the API date layout
#[must_use]
pub fn format_api_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp (any offset) into UTC
///
/// Fails with a 400 naming the rejected input.
pub fn parse_api_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::bad_request(format!("invalid date {raw}")).with_cause(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn layout_matches_formatter() {
        let dt = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
            .single()
            .expect("valid calendar date");
        assert_eq!(dt.format(API_DATE_LAYOUT).to_string(), format_api_date(&dt));
        assert_eq!(format_api_date(&dt), "2024-05-01T12:30:00Z");
    }
}
