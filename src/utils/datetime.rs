//! Wall-clock time parsing and formatting
//!
//! The host exchanges times as "hh:mm am/pm" strings (e.g. "02:30 pm").
//! Parsing a host-supplied default tries the strict entry format first and
//! then a fixed set of relaxed clock formats; a string neither path
//! understands yields no selection rather than an error.

use chrono::NaiveTime;

/// Format of every value reported to the host, e.g. "02:30 pm".
pub const TIME_ENTRY_FORMAT: &str = "%I:%M %P";

/// Strict entry format tried first when parsing a default.
pub const STRICT_TIME_FORMAT: &str = "%I:%M %p";

/// Relaxed fallback formats tried when the strict parse fails.
const LENIENT_TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M%p", "%I %p"];

/// Parse a time in the strict "hh:mm am/pm" entry format.
pub fn parse_strict(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), STRICT_TIME_FORMAT).ok()
}

/// Parse a time from any of the relaxed fallback formats.
pub fn parse_lenient(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    LENIENT_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(input, fmt).ok())
}

/// Parse a host-supplied default value: strict format first, relaxed
/// fallback second, `None` when both fail.
pub fn parse_default(input: &str) -> Option<NaiveTime> {
    if input.trim().is_empty() {
        return None;
    }
    parse_strict(input).or_else(|| parse_lenient(input))
}

/// Format a selected time the way it is reported to the host.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_ENTRY_FORMAT).to_string()
}
