use chrono::NaiveDate;

use super::ExpansionBounds;

/// Whether a date falls inside the study's active window. Absent bounds
/// are unbounded on that side; present bounds are inclusive.
pub(super) fn in_active_window(date: NaiveDate, bounds: &ExpansionBounds) -> bool {
    bounds.study_start.map_or(true, |start| date >= start)
        && bounds.study_end.map_or(true, |end| date <= end)
}
