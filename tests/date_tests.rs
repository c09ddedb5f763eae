use shipbot::utils::dates::to_human_readable;

/// Tests for the shipment-date formatter.
/// These verify the human-readable rendering stays stable and that the
/// formatter is total: bad input degrades to "Not available" instead of
/// failing the request.

#[test]
fn test_formats_full_timestamp_with_utc_marker() {
    let formatted = to_human_readable("2022-08-18T21:31:25.565Z");

    assert_eq!(
        formatted, "Thursday, 18 Aug 2022",
        "Timestamp with trailing Z should format as weekday, day, month, year"
    );
}

#[test]
fn test_formats_timestamp_without_utc_marker() {
    let formatted = to_human_readable("2023-01-02T10:00:00.000");

    assert_eq!(
        formatted, "Monday, 02 Jan 2023",
        "Timestamp without trailing Z should format identically"
    );
}

#[test]
fn test_single_digit_day_is_zero_padded() {
    let formatted = to_human_readable("2023-03-05T08:00:00Z");

    assert_eq!(formatted, "Sunday, 05 Mar 2023");
}

#[test]
fn test_date_only_input_is_accepted() {
    // A date with no time component formats as that day
    let formatted = to_human_readable("2022-08-18");

    assert_eq!(formatted, "Thursday, 18 Aug 2022");
}

#[test]
fn test_invalid_timestamp_returns_not_available() {
    assert_eq!(
        to_human_readable("not-a-date"),
        "Not available",
        "Garbage input should degrade to the sentinel string"
    );
}

#[test]
fn test_empty_string_returns_not_available() {
    assert_eq!(to_human_readable(""), "Not available");
}

#[test]
fn test_missing_field_sentinel_passes_through_as_not_available() {
    // The API client substitutes "Not available" for a missing shipmentDate
    // field; the formatter must keep it as-is rather than erroring differently
    assert_eq!(to_human_readable("Not available"), "Not available");
}

#[test]
fn test_multiple_trailing_utc_markers_are_stripped() {
    // rstrip semantics: every trailing Z is removed before parsing
    let formatted = to_human_readable("2022-08-18T21:31:25.565ZZ");

    assert_eq!(formatted, "Thursday, 18 Aug 2022");
}
