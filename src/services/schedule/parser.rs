//! Free-text parsers for schedule and duration fields.
//!
//! Study schedules arrive as prose ("매주 금요일 저녁, 온라인",
//! "19:30-21:30"). These parsers pull the machine-usable parts out and
//! degrade to absence when nothing recognizable is present.

use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::event::Location;

// Ordered token table: full Korean names, Korean single-character
// abbreviations, English names, English abbreviations. First match wins.
const WEEKDAY_TOKENS: &[(&str, Weekday)] = &[
    ("일요일", Weekday::Sun),
    ("월요일", Weekday::Mon),
    ("화요일", Weekday::Tue),
    ("수요일", Weekday::Wed),
    ("목요일", Weekday::Thu),
    ("금요일", Weekday::Fri),
    ("토요일", Weekday::Sat),
    ("일", Weekday::Sun),
    ("월", Weekday::Mon),
    ("화", Weekday::Tue),
    ("수", Weekday::Wed),
    ("목", Weekday::Thu),
    ("금", Weekday::Fri),
    ("토", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sun", Weekday::Sun),
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
];

const ONLINE_KEYWORDS: &[&str] = &["온라인", "online", "zoom", "meet"];
const OFFLINE_KEYWORDS: &[&str] = &["오프라인", "offline", "대면"];

// A time component is one or two digits of hour, then either a colon with
// a one-or-two-digit minute ("9:5", "19:30") or a bare two-digit minute
// ("1930"). AM/PM markers are tolerated and ignored.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2})(?::(\d{1,2})|(\d{2}))?\s*(?:AM|PM)?\s*[-~]\s*(\d{1,2})(?::(\d{1,2})|(\d{2}))?\s*(?:AM|PM)?",
    )
    .expect("time range pattern is valid")
});

static SINGLE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})(?::(\d{1,2})|(\d{2}))?").expect("time pattern is valid"));

/// Start and optional end of a study's meeting slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
}

impl TimeRange {
    /// Start time as a zero-padded 24-hour `HH:MM` string.
    pub fn start_hhmm(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    /// End time as `HH:MM`, when one was parsed.
    pub fn end_hhmm(&self) -> Option<String> {
        self.end.map(|end| end.format("%H:%M").to_string())
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN,
            end: None,
        }
    }
}

/// Extract a meeting time range from free-text duration ("19:30-21:30",
/// "19:30 ~ 21:30", "7:30PM-9:30PM"). A lone time yields a start with no
/// end; anything unrecognizable yields the `00:00`/absent-end default.
pub fn parse_duration(duration: Option<&str>) -> TimeRange {
    let Some(text) = duration else {
        return TimeRange::default();
    };

    if let Some(caps) = TIME_RANGE.captures(text) {
        let start = clock(&caps[1], caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str()));
        let end = clock(&caps[4], caps.get(5).or_else(|| caps.get(6)).map(|m| m.as_str()));
        if let (Some(start), Some(end)) = (start, end) {
            return TimeRange {
                start,
                end: Some(end),
            };
        }
    }

    if let Some(caps) = SINGLE_TIME.captures(text) {
        if let Some(start) = clock(&caps[1], caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str()))
        {
            return TimeRange { start, end: None };
        }
    }

    TimeRange::default()
}

fn clock(hour: &str, minute: Option<&str>) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.unwrap_or("0").parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Find the weekday a schedule text mentions. `None` when no recognized
/// token is present; the expander treats that as "produce nothing" rather
/// than guessing a day.
pub fn parse_day_of_week(schedule: &str) -> Option<Weekday> {
    let lowered = schedule.to_lowercase();
    WEEKDAY_TOKENS
        .iter()
        .find(|(token, _)| lowered.contains(token))
        .map(|(_, weekday)| *weekday)
}

/// Infer the meeting location from schedule and description text.
pub fn parse_location(schedule: Option<&str>, description: Option<&str>) -> Option<Location> {
    let text = format!(
        "{} {}",
        schedule.unwrap_or_default(),
        description.unwrap_or_default()
    )
    .to_lowercase();

    if ONLINE_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Some(Location::Online);
    }
    if OFFLINE_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Some(Location::Offline);
    }
    None
}

/// Whether the schedule restricts a daily cadence to weekdays.
pub fn weekdays_only(schedule: &str) -> bool {
    schedule.contains("평일") || schedule.to_lowercase().contains("weekday")
}
