// Date utility functions
// Normalization of heterogeneous backend date fields and month arithmetic

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::study::DateInput;

/// Normalize any backend date representation to a plain timestamp.
///
/// This is the single choke point for reading date-like study fields.
/// Missing values, short tuples, out-of-range components and unparseable
/// strings all yield `None`; nothing here panics.
pub fn parse_date(value: Option<&DateInput>) -> Option<NaiveDateTime> {
    match value? {
        DateInput::Native(timestamp) => Some(*timestamp),
        DateInput::Tuple(parts) => date_from_tuple(parts),
        DateInput::Iso(text) => date_from_text(text),
    }
}

/// Tuple layout on the wire is `[year, month, day, hour?, minute?, second?]`
/// with a 1-based month.
fn date_from_tuple(parts: &[i64]) -> Option<NaiveDateTime> {
    if parts.len() < 3 {
        return None;
    }

    let year = i32::try_from(parts[0]).ok()?;
    let month = u32::try_from(parts[1]).ok()?;
    let day = u32::try_from(parts[2]).ok()?;
    let hour = u32::try_from(parts.get(3).copied().unwrap_or(0)).ok()?;
    let minute = u32::try_from(parts.get(4).copied().unwrap_or(0)).ok()?;
    let second = u32::try_from(parts.get(5).copied().unwrap_or(0)).ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

fn date_from_text(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if let Ok(timestamp) = trimmed.parse::<NaiveDateTime>() {
        return Some(timestamp);
    }
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN));
    }
    // Offset-carrying form: take the clock time as written, no zone math.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.naive_local());
    }
    None
}

/// First and last day of a month, `month0` being a 0-based index.
/// `None` for an index past December or a year outside chrono's range.
pub fn month_bounds(year: i32, month0: u32) -> Option<(NaiveDate, NaiveDate)> {
    if month0 > 11 {
        return None;
    }
    let start = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let next_month_start = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)?
    };
    Some((start, next_month_start.pred_opt()?))
}

/// First date on or after `date` that falls on `weekday`.
pub fn first_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (weekday.num_days_from_sunday() as i64
        - date.weekday().num_days_from_sunday() as i64
        + 7)
        % 7;
    date + Duration::days(offset)
}
