//! Target date helpers: picking, storing and displaying.

use crate::config::DEFAULT_DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Write;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Storage form of a target date: `2024-12-31T00:00:00.000Z`.
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Inverse of [`to_iso_string`]. Accepts any RFC 3339 offset.
pub fn from_iso_string(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Turn user input into a target date, the way a date picker would.
///
/// `input` is either `YYYY-MM-DD` or a full RFC 3339 timestamp. A bare date
/// keeps the time of day of the picker's starting value: the `current`
/// target date when there is one, `now` otherwise. Days before today (in
/// `now`'s time zone) cannot be picked.
pub fn pick_target_date<Tz: TimeZone>(
    input: &str,
    current: Option<DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> AppResult<DateTime<Utc>> {
    let tz = now.timezone();
    let raw = input.trim();

    let picked = if let Some(dt) = from_iso_string(raw) {
        dt
    } else if let Some(day) = parse_date(raw) {
        let time = match current {
            Some(c) => c.with_timezone(&tz).naive_local().time(),
            None => now.naive_local().time(),
        };
        resolve_local(&tz, day.and_time(time))
            .ok_or_else(|| AppError::InvalidDate(input.to_string()))?
            .with_timezone(&Utc)
    } else {
        return Err(AppError::InvalidDate(input.to_string()));
    };

    let picked_day = picked.with_timezone(&tz).naive_local().date();
    if picked_day < now.naive_local().date() {
        return Err(AppError::PastDate(picked_day.to_string()));
    }

    Ok(picked)
}

/// Local wall time to an instant. A time skipped by a daylight-saving jump
/// moves forward in whole hours until it exists (02:30 becomes 03:30).
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    (0..=3)
        .map(|h| local + Duration::hours(h))
        .find_map(|t| tz.from_local_datetime(&t).earliest())
}

/// Render a date in local time with a chrono format string. A broken
/// format falls back to the default instead of failing.
pub fn display_local(dt: &DateTime<Utc>, format: &str) -> String {
    let local = dt.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", local.format(DEFAULT_DATE_FORMAT));
    }
    out
}
