//! Creation timestamps in the viewer's long en-US form.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset};

/// Shown when the endpoint sends a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// UTC offset of the machine the page is viewed on.
pub fn viewer_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Parses RFC 3339, RFC 2822 and naive ISO-8601 timestamps. Naive date-times
/// are taken as viewer-local; bare dates as UTC midnight.
pub fn parse_timestamp(raw: &str, viewer: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed);
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return naive.and_local_timezone(viewer).single();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Formats `raw` in the viewer's offset, e.g. `April 3, 2024 at 5:30 PM`.
pub fn format_created_at(raw: &str, viewer: FixedOffset) -> String {
    match parse_timestamp(raw, viewer) {
        Some(timestamp) => timestamp
            .with_timezone(&viewer)
            .format(DISPLAY_FORMAT)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}
