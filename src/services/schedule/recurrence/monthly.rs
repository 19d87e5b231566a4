use chrono::NaiveDate;

use super::utils::in_active_window;
use super::ExpansionBounds;

use crate::services::schedule::parser::parse_day_of_week;
use crate::utils::date::first_weekday_on_or_after;

/// First occurrence of the schedule's weekday within the target month;
/// at most one date. Positional rules ("third Thursday") are not part of
/// the schedule format and are deliberately not modeled.
pub(super) fn generate(schedule: Option<&str>, bounds: &ExpansionBounds) -> Vec<NaiveDate> {
    let Some(weekday) = schedule.and_then(parse_day_of_week) else {
        log::debug!("schedule text has no weekday token; monthly expansion yields nothing");
        return Vec::new();
    };

    let target = first_weekday_on_or_after(bounds.month_start, weekday);
    if target <= bounds.month_end && in_active_window(target, bounds) {
        vec![target]
    } else {
        Vec::new()
    }
}
