//! Date/time display formatting
//!
//! Turns an instant (or a date string) into the three fixed views the pages
//! render: full date-time, date-only, and time-only, all in an en-US style
//! 12-hour convention. Unparsable input degrades to the `"Invalid date"`
//! sentinel in every view instead of raising.

use log::error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::errors::AppError;
use crate::types::DateTimeViews;

/// Sentinel returned for all three views when the input cannot be parsed
pub const INVALID_DATE: &str = "Invalid date";

/// A date/time input: an already-parsed instant or raw text
///
/// Text inputs accept RFC 3339, `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`
/// (taken as UTC midnight). Instants are normalized to UTC before rendering
/// so that output does not vary with the input's offset.
#[derive(Debug, Clone)]
pub enum DateValue {
    Instant(OffsetDateTime),
    Text(String),
}

impl From<OffsetDateTime> for DateValue {
    fn from(at: OffsetDateTime) -> Self {
        DateValue::Instant(at)
    }
}

impl From<&str> for DateValue {
    fn from(raw: &str) -> Self {
        DateValue::Text(raw.to_string())
    }
}

impl From<String> for DateValue {
    fn from(raw: String) -> Self {
        DateValue::Text(raw)
    }
}

/// Format the three views, degrading to the sentinel triple on failure
///
/// Failures are logged here, once; callers that need the error instead use
/// [`try_format_date_time`].
pub fn format_date_time(value: DateValue) -> DateTimeViews {
    match try_format_date_time(&value) {
        Ok(views) => views,
        Err(err) => {
            error!("Date formatting failed: {}", err);
            DateTimeViews {
                date_time: INVALID_DATE.to_string(),
                date_only: INVALID_DATE.to_string(),
                time_only: INVALID_DATE.to_string(),
            }
        }
    }
}

/// Fallible core of [`format_date_time`]
pub fn try_format_date_time(value: &DateValue) -> Result<DateTimeViews, AppError> {
    let instant = resolve_instant(value)?;

    let date_time_desc = format_description!(
        "[weekday repr:short], [month repr:short] [day padding:none], [hour repr:12 padding:none]:[minute] [period]"
    );
    let date_only_desc =
        format_description!("[weekday repr:short], [month repr:short] [day padding:none], [year]");
    let time_only_desc = format_description!("[hour repr:12 padding:none]:[minute] [period]");

    Ok(DateTimeViews {
        date_time: render(instant, date_time_desc)?,
        date_only: render(instant, date_only_desc)?,
        time_only: render(instant, time_only_desc)?,
    })
}

fn render(
    instant: OffsetDateTime,
    desc: &[time::format_description::BorrowedFormatItem<'_>],
) -> Result<String, AppError> {
    instant
        .format(desc)
        .map_err(|e| AppError::InvalidDate(e.to_string()))
}

fn resolve_instant(value: &DateValue) -> Result<OffsetDateTime, AppError> {
    let instant = match value {
        DateValue::Instant(at) => *at,
        DateValue::Text(raw) => parse_instant(raw.trim())?,
    };
    Ok(instant.to_offset(UtcOffset::UTC))
}

fn parse_instant(raw: &str) -> Result<OffsetDateTime, AppError> {
    if raw.is_empty() {
        return Err(AppError::InvalidDate("(empty)".to_string()));
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(at);
    }
    let stamp = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, stamp) {
        return Ok(dt.assume_utc());
    }
    let day = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, day) {
        return Ok(date.midnight().assume_utc());
    }
    Err(AppError::InvalidDate(raw.to_string()))
}
