use chrono::{Duration, NaiveDate};

use super::utils::in_active_window;
use super::ExpansionBounds;

use crate::services::schedule::parser::parse_day_of_week;
use crate::utils::date::first_weekday_on_or_after;

/// Walk from the first occurrence of the schedule's weekday on or after
/// month start, stepping `step_days` (7 for weekly, 14 for biweekly),
/// until past month end. An unparseable weekday produces no dates; the
/// rule never guesses a day.
pub(super) fn generate(
    schedule: Option<&str>,
    step_days: i64,
    bounds: &ExpansionBounds,
) -> Vec<NaiveDate> {
    let Some(weekday) = schedule.and_then(parse_day_of_week) else {
        log::debug!("schedule text has no weekday token; weekly expansion yields nothing");
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut current = first_weekday_on_or_after(bounds.month_start, weekday);

    while current <= bounds.month_end {
        if in_active_window(current, bounds) {
            dates.push(current);
        }
        current = current + Duration::days(step_days);
    }

    dates
}
