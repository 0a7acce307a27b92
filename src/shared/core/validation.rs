// Pure input predicates shared by the services and the console request builders.

use chrono::NaiveDateTime;

/// Format used for every date/time typed by a user or printed to the console.
pub const DATE_FORMAT: &str = "%m-%d-%Y %H:%M";

pub fn is_valid_input_string(input: Option<&str>) -> bool {
    input.is_some_and(|s| !s.trim().is_empty())
}

pub fn is_valid_numeric_input(value: i64) -> bool {
    value > 0
}

pub fn is_valid_end_time(start_time: NaiveDateTime, end_time: NaiveDateTime) -> bool {
    end_time > start_time
}

/// Exact parse: the string must round-trip through `format` unchanged, so
/// missing zero padding or trailing input is rejected.
pub fn is_valid_date_string(input: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(input, format)
        .map(|parsed| parsed.format(format).to_string() == input)
        .unwrap_or(false)
}
