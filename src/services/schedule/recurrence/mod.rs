//! Recurrence expansion: from a cadence plus schedule text to the
//! concrete dates it produces within one month.
//!
//! Each cadence lives in its own submodule with the same
//! `generate(...) -> Vec<NaiveDate>` shape. Expansion never fails;
//! malformed schedule text means that study contributes no dates.

use chrono::NaiveDate;

use crate::models::study::RecurrenceType;

mod daily;
mod monthly;
mod one_time;
mod utils;
mod weekly;

/// Bounds an expansion works within: the visible month and the study's
/// optional active window. All four bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub(super) struct ExpansionBounds {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub study_start: Option<NaiveDate>,
    pub study_end: Option<NaiveDate>,
}

/// Enumerate the dates in the month that the recurrence rule produces,
/// in ascending order.
pub(super) fn expand(
    kind: RecurrenceType,
    schedule: Option<&str>,
    bounds: &ExpansionBounds,
) -> Vec<NaiveDate> {
    match kind {
        RecurrenceType::OneTime => one_time::generate(bounds),
        RecurrenceType::Daily => daily::generate(schedule, bounds),
        RecurrenceType::Weekly => weekly::generate(schedule, 7, bounds),
        RecurrenceType::Biweekly => weekly::generate(schedule, 14, bounds),
        RecurrenceType::Monthly => monthly::generate(schedule, bounds),
    }
}
