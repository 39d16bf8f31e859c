// ADIF Field Validation
//
// Validation is dispatched on the declared data type alone, never on the content.

use chrono::NaiveDate;

use super::bands::is_known_band;
use super::modes::{is_deprecated_mode, is_known_mode};
use super::types::DataType;

/// Earliest year accepted for a date (type D)
pub const MIN_YEAR: i32 = 1930;

/// Check whether `value` is a valid `data_type` value for the field `field_name`.
///
/// Empty values are always valid. Enumerations are only checked for MODE and BAND,
/// and only in their canonical case: MODE upper-case, BAND lower-case.
pub fn is_valid(field_name: &str, value: &str, data_type: DataType) -> bool {
    if value.is_empty() {
        return true;
    }

    match data_type {
        DataType::Number => is_valid_number(value),
        DataType::Boolean => value == "Y" || value == "N",
        DataType::Date => is_valid_adif_date(value),
        DataType::Time => is_valid_adif_time(value),
        DataType::String | DataType::IntlString => true,
        DataType::MultilineString | DataType::IntlMultilineString => true,
        DataType::Location => is_valid_location(value),
        DataType::Enumeration | DataType::AwardList => {
            if field_name.eq_ignore_ascii_case("MODE") {
                !value.bytes().any(|b| b.is_ascii_lowercase())
                    && (is_known_mode(value) || is_deprecated_mode(value))
            } else if field_name.eq_ignore_ascii_case("BAND") {
                !value.bytes().any(|b| b.is_ascii_uppercase()) && is_known_band(value)
            } else {
                true
            }
        }
    }
}

/// Same as [`is_valid`], but S and M values are also restricted to printable
/// ASCII (32-126; M additionally allows CR and LF).
pub fn is_valid_strict(field_name: &str, value: &str, data_type: DataType) -> bool {
    let printable = |c: char| (' '..='~').contains(&c);
    let ascii_ok = match data_type {
        DataType::String => value.chars().all(printable),
        DataType::MultilineString => value.chars().all(|c| printable(c) || c == '\r' || c == '\n'),
        _ => true,
    };
    ascii_ok && is_valid(field_name, value, data_type)
}

/// Optional leading minus, then digits with at most one decimal point (not a bare point)
fn is_valid_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || digits == "." {
        return false;
    }
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Validate ADIF date format (YYYYMMDD) against the civil calendar
pub fn is_valid_adif_date(date_str: &str) -> bool {
    if date_str.len() != 8 || !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let year: i32 = match date_str[..4].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };
    let month: u32 = match date_str[4..6].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let day: u32 = match date_str[6..8].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    year >= MIN_YEAR && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Validate ADIF time format (HHMM or HHMMSS)
pub fn is_valid_adif_time(time_str: &str) -> bool {
    let bytes = time_str.as_bytes();
    if !matches!(bytes.len(), 4 | 6) || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let pair = |i: usize| (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
    pair(0) <= 23 && pair(2) <= 59 && (bytes.len() == 4 || pair(4) <= 59)
}

/// Validate a location: `[NSEW]DDD MM.MMM` without the space, e.g. `N051 30.000` -> `N05130.000`
fn is_valid_location(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || !matches!(bytes[0], b'N' | b'S' | b'E' | b'W') {
        return false;
    }
    let rest = &bytes[1..];
    let digit_positions = [0, 1, 2, 3, 4, 6, 7, 8];
    if rest[5] != b'.' || !digit_positions.iter().all(|&i| rest[i].is_ascii_digit()) {
        return false;
    }
    let degrees: u32 = match value[1..4].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    let minutes: u32 = match value[4..6].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    degrees <= 180 && minutes <= 59
}
