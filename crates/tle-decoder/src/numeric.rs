//! TLE numeric encodings
//!
//! Each decoder takes the raw column slice and returns the value or a
//! [`NumericError`] carrying the offending text.

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::NumericError;

/// Two-digit years below the pivot belong to the 2000s, the rest to the 1900s.
///
/// Applies to both the designator year and the epoch year. NORAD's own
/// convention pivots at 57, so launches from 1957-1959 decode as 2057-2059.
pub const YEAR_PIVOT: u32 = 60;

const NANOS_PER_DAY: f64 = 86_400.0 * 1_000_000_000.0;

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decode the exponent-suffix notation used by the drag terms.
///
/// `"-12345-3"` is `-0.12345e-3`. The value is produced by parsing the
/// normalized decimal literal, so it is the nearest `f64` to the text.
pub fn decode_exponential(field: &str) -> Result<f64, NumericError> {
    let trimmed = field.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        None => return Err(NumericError::new(field, "empty field")),
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        Some(_) => ("", trimmed),
    };

    let split = unsigned
        .rfind(|c| c == '+' || c == '-')
        .ok_or_else(|| NumericError::new(field, "missing exponent sign"))?;
    let (mantissa, exponent) = unsigned.split_at(split);
    let (exponent_sign, exponent) = exponent.split_at(1);

    if !is_digits(mantissa) {
        return Err(NumericError::new(field, "mantissa is not a digit sequence"));
    }
    if !is_digits(exponent) {
        return Err(NumericError::new(field, "exponent is not a digit sequence"));
    }

    format!("{sign}0.{mantissa}e{exponent_sign}{exponent}")
        .parse()
        .map_err(|_| NumericError::new(field, "not a valid real number"))
}

/// Decode a digits-only field with an assumed leading `0.`
pub fn decode_implied_decimal(field: &str) -> Result<f64, NumericError> {
    let digits = field.trim();
    if !is_digits(digits) {
        return Err(NumericError::new(field, "expected digits only"));
    }
    format!("0.{digits}")
        .parse()
        .map_err(|_| NumericError::new(field, "not a valid real number"))
}

/// Decode a signed decimal whose leading zero may be omitted (`-.00002182`)
pub fn decode_leading_point(field: &str) -> Result<f64, NumericError> {
    let trimmed = field.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let zero = if unsigned.starts_with('.') { "0" } else { "" };
    parse_real(&format!("{sign}{zero}{unsigned}"))
        .map_err(|e| NumericError::new(field, e.reason))
}

/// Ordinary decimal real on a trimmed slice; infinities and NaN are rejected
pub fn parse_real(field: &str) -> Result<f64, NumericError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(NumericError::new(field, "empty field"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumericError::new(field, "not a valid real number")),
    }
}

/// Ordinary decimal integer on a trimmed slice
pub fn parse_integer<T: FromStr>(field: &str) -> Result<T, NumericError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(NumericError::new(field, "empty field"));
    }
    trimmed
        .parse()
        .map_err(|_| NumericError::new(field, "not a valid integer"))
}

/// Expand a two-digit year around [`YEAR_PIVOT`]
pub fn expand_two_digit_year(yy: u32) -> Result<i32, NumericError> {
    match yy {
        0..=99 if yy < YEAR_PIVOT => Ok(2000 + yy as i32),
        0..=99 => Ok(1900 + yy as i32),
        _ => Err(NumericError::new(&yy.to_string(), "year has more than two digits")),
    }
}

/// Midnight UTC on January 1 of `year`, advanced by `day_of_year` days
pub fn epoch_from_parts(year: i32, day_of_year: f64) -> Result<DateTime<Utc>, NumericError> {
    let raw = || day_of_year.to_string();
    if !day_of_year.is_finite() || day_of_year < 0.0 {
        return Err(NumericError::new(&raw(), "day of year must be a non-negative real"));
    }

    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| NumericError::new(&year.to_string(), "year out of range"))?
        .and_utc();

    let whole = day_of_year.trunc();
    let fraction = day_of_year - whole;
    let offset = Duration::try_days(whole as i64)
        .and_then(|days| {
            days.checked_add(&Duration::nanoseconds((fraction * NANOS_PER_DAY).round() as i64))
        })
        .ok_or_else(|| NumericError::new(&raw(), "day of year out of range"))?;

    start
        .checked_add_signed(offset)
        .ok_or_else(|| NumericError::new(&raw(), "epoch out of range"))
}

/// Modulo-10 checksum over columns 1-68: digits count their value, `-` counts 1
pub fn checksum_digit(line: &str) -> u32 {
    let sum: u32 = line
        .chars()
        .take(crate::columns::MIN_LINE_WIDTH)
        .map(|c| match c {
            '0'..='9' => c as u32 - '0' as u32,
            '-' => 1,
            _ => 0,
        })
        .sum();
    sum % 10
}
