use chrono::NaiveTime;
use timedock::utils::datetime::{format_time, parse_default, parse_lenient, parse_strict};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_strict_parse() {
    assert_eq!(parse_strict("02:30 pm"), Some(time(14, 30)));
    assert_eq!(parse_strict("12:00 am"), Some(time(0, 0)));
    assert_eq!(parse_strict("12:00 pm"), Some(time(12, 0)));
    // Meridiem case is not significant
    assert_eq!(parse_strict("02:30 PM"), Some(time(14, 30)));
}

#[test]
fn test_strict_parse_rejects_24_hour() {
    assert_eq!(parse_strict("14:30"), None);
    assert_eq!(parse_strict("14:30 pm"), None);
}

#[test]
fn test_lenient_parse_fallback() {
    assert_eq!(parse_lenient("14:30"), Some(time(14, 30)));
    assert_eq!(parse_lenient("14:30:15"), Some(NaiveTime::from_hms_opt(14, 30, 15).unwrap()));
    assert_eq!(parse_lenient("02:30pm"), Some(time(14, 30)));
}

#[test]
fn test_parse_default_tries_strict_then_lenient() {
    // Strict format wins directly
    assert_eq!(parse_default("02:30 pm"), Some(time(14, 30)));
    // 24-hour clock only succeeds on the lenient path
    assert_eq!(parse_default("14:30"), Some(time(14, 30)));
}

#[test]
fn test_parse_default_total_failure() {
    assert_eq!(parse_default("not-a-time"), None);
    assert_eq!(parse_default(""), None);
    assert_eq!(parse_default("   "), None);
    assert_eq!(parse_default("25:99 pm"), None);
}

#[test]
fn test_parse_default_trims_whitespace() {
    assert_eq!(parse_default("  02:30 pm  "), Some(time(14, 30)));
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(time(14, 30)), "02:30 pm");
    assert_eq!(format_time(time(0, 15)), "12:15 am");
    assert_eq!(format_time(time(12, 0)), "12:00 pm");
    assert_eq!(format_time(time(9, 5)), "09:05 am");
}

#[test]
fn test_round_trip_idempotence() {
    for input in ["02:30 pm", "12:00 am", "11:59 pm", "01:00 am"] {
        let parsed = parse_default(input).unwrap();
        assert_eq!(format_time(parsed), input);
    }
}

#[test]
fn test_lenient_input_normalizes_on_format() {
    let parsed = parse_default("14:30").unwrap();
    assert_eq!(format_time(parsed), "02:30 pm");
}
