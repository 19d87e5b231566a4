use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::utils::in_active_window;
use super::ExpansionBounds;

use crate::services::schedule::parser;

/// Every date of the month, clipped to the active window. A weekdays-only
/// marker in the schedule text drops calendar Saturdays and Sundays.
pub(super) fn generate(schedule: Option<&str>, bounds: &ExpansionBounds) -> Vec<NaiveDate> {
    let weekdays_only = schedule.map(parser::weekdays_only).unwrap_or(false);

    let mut dates = Vec::new();
    let mut current = bounds.month_start;

    while current <= bounds.month_end {
        let weekend = matches!(current.weekday(), Weekday::Sat | Weekday::Sun);
        if in_active_window(current, bounds) && !(weekdays_only && weekend) {
            dates.push(current);
        }
        current = current + Duration::days(1);
    }

    dates
}
