use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "Monday, January 5, 2026"
    FullDate,
    /// "02:30 PM"
    ShortTime,
}

/// Renders an ISO 8601 timestamp for display. Bad input degrades to the
/// literal `"Invalid date"` instead of failing the caller, so one malformed
/// slot never blocks rendering the rest of the list.
///
/// Timestamps carrying an offset are rendered in that offset; naive
/// timestamps are rendered as written.
pub fn format_date_time(value: &str, format: DateFormat) -> String {
    match parse_date_time(value) {
        Some(dt) => match format {
            DateFormat::FullDate => format!(
                "{}, {} {}, {}",
                dt.format("%A"),
                dt.format("%B"),
                dt.format("%-d"),
                dt.format("%Y"),
            ),
            DateFormat::ShortTime => {
                let (pm, hour) = dt.hour12();
                format!(
                    "{:02}:{:02} {}",
                    hour,
                    dt.minute(),
                    if pm { "PM" } else { "AM" }
                )
            }
        },
        None => {
            log::warn!("date formatting error: {value:?}");
            "Invalid date".to_string()
        }
    }
}

fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if value.trim().is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Calendar day of a slot timestamp, for date-range filtering. `None` for
/// unparseable input.
pub fn slot_day(value: &str) -> Option<NaiveDate> {
    parse_date_time(value).map(|dt| dt.date())
}
