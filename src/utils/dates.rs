//! Date formatting for shipment timestamps.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::error;

/// Convert an ISO 8601 timestamp to a human-readable date.
///
/// Accepts timestamps with or without a trailing `Z` UTC marker and with or
/// without a time component, e.g. `"2022-08-18T21:31:25.565Z"` becomes
/// `"Thursday, 18 Aug 2022"`. No timezone conversion is performed; the parsed
/// fields are formatted as-is.
///
/// Returns the literal `"Not available"` for anything that does not parse, so
/// callers never have to handle a formatting failure.
#[must_use]
pub fn to_human_readable(iso_date: &str) -> String {
    let trimmed = iso_date.trim_end_matches('Z');

    let parsed = trimmed
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            // Date-only inputs parse as midnight
            trimmed
                .parse::<NaiveDate>()
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match parsed {
        Some(dt) => dt.format("%A, %d %b %Y").to_string(),
        None => {
            error!(iso_date, "Invalid date format encountered");
            "Not available".to_string()
        }
    }
}
