//! Common utilities for document generation.
//!
//! Identifier and PIN generation, date formatting and text escaping.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rand::Rng;

pub const PIN_LEN: usize = 6;
const DOC_ID_PREFIX: &str = "UZ-NOSUD";
const DOC_ID_SUFFIX_LEN: usize = 6;
const SERIAL_NO_LEN: usize = 10;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uniform 6-digit PIN, zero padded.
pub fn generate_pin<R: Rng>(rng: &mut R) -> String {
    format!("{:0width$}", rng.gen_range(0..1_000_000u32), width = PIN_LEN)
}

/// Document id (`UZ-NOSUD-YYYYMMDD-XXXXXX`) and a 10-digit serial number.
pub fn generate_ids<R: Rng>(today: NaiveDate, rng: &mut R) -> (String, String) {
    let suffix: String = (0..DOC_ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    let doc_id = format!("{}-{}-{}", DOC_ID_PREFIX, today.format("%Y%m%d"), suffix);

    let serial_no: String = (0..SERIAL_NO_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();

    (doc_id, serial_no)
}

/// Shift weekends back to Friday and pick a random office-hours time.
///
/// Hour is uniform in 8..=18, minute and second in 0..60.
pub fn pick_business_date<R: Rng>(today: NaiveDate, rng: &mut R) -> NaiveDateTime {
    let date = match today.weekday() {
        Weekday::Sun => today - Duration::days(2),
        Weekday::Sat => today - Duration::days(1),
        _ => today,
    };

    let hour = rng.gen_range(8..=18);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);
    let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN);

    date.and_time(time)
}

/// `DD.MM.YYYY`
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// `HH:MM`
pub fn format_time(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Replace every character outside Latin-1 with `?`.
///
/// Used when no Unicode font is available, so Cyrillic text degrades to placeholders.
pub fn replace_non_latin1(value: &str) -> String {
    value
        .chars()
        .map(|c| if u32::from(c) <= 0xFF { c } else { '?' })
        .collect()
}
