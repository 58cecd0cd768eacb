//! Cell-to-instant parsing for chronological stage ordering.
//!
//! Failures here are expected, per-cell conditions: every helper returns
//! `None` instead of an error, and the caller skips the cell.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::{epoch, timestamp};
use crate::record::CellValue;

/// Parse a cell as an absolute instant, or `None` when it has none.
///
/// Numeric cells are spreadsheet serial dates; text cells go through the
/// general date layouts.
pub fn cell_instant(cell: &CellValue) -> Option<DateTime<Utc>> {
    match cell {
        CellValue::Timestamp(instant) => Some(*instant),
        CellValue::Number(serial) => serial_to_instant(*serial),
        CellValue::Text(text) => parse_text_instant(text),
        CellValue::Empty => None,
    }
}

/// Convert a spreadsheet serial date (days since 1899-12-30, fractional days
/// as time of day) to a UTC instant.
pub fn serial_to_instant(serial: f64) -> Option<DateTime<Utc>> {
    if !serial.is_finite() {
        return None;
    }
    let seconds = serial * epoch::SECONDS_PER_DAY;
    if seconds.abs() >= 9.0e18 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(
        epoch::SERIAL_EPOCH_YEAR,
        epoch::SERIAL_EPOCH_MONTH,
        epoch::SERIAL_EPOCH_DAY,
    )?
    .and_hms_opt(0, 0, 0)?;
    let offset = Duration::try_seconds(seconds.round() as i64)?;
    let naive = base.checked_add_signed(offset)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Parse a text cell against the general date layouts.
///
/// Empty and null-like texts parse to `None`. Month-day forms without a year
/// (`Jan 1`) are anchored to a fixed year so relative ordering still holds.
pub fn parse_text_instant(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_null_like(trimmed) {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    for layout in timestamp::DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for layout in timestamp::DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return date_to_instant(date);
        }
    }
    if let Some((month, day)) = parse_month_day_tokens(trimmed) {
        return date_to_instant(NaiveDate::from_ymd_opt(
            epoch::DEFAULT_TEXT_YEAR,
            month,
            day,
        )?);
    }
    None
}

fn is_null_like(text: &str) -> bool {
    timestamp::NULL_LIKE
        .iter()
        .any(|marker| text.eq_ignore_ascii_case(marker))
}

fn date_to_instant(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Extract `(month, day)` from a year-less form like `Jan 1` or `1 January`.
fn parse_month_day_tokens(text: &str) -> Option<(u32, u32)> {
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
        .collect();
    if tokens.len() != 2 {
        return None;
    }
    let month = tokens.iter().find_map(|token| month_token_to_number(token))?;
    let day = tokens
        .iter()
        .find_map(|token| token.parse::<u32>().ok())?;
    if (1..=31).contains(&day) {
        Some((month, day))
    } else {
        None
    }
}

/// Convert a lowercase month token to a month number (1-12).
fn month_token_to_number(token: &str) -> Option<u32> {
    match token {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}
