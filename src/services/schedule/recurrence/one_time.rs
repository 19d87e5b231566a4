use chrono::NaiveDate;

use super::ExpansionBounds;

/// A one-off session happens on the study's start date, if that date is
/// visible in the target month. No start date means nothing to show.
pub(super) fn generate(bounds: &ExpansionBounds) -> Vec<NaiveDate> {
    let Some(date) = bounds.study_start else {
        log::debug!("one-time study without a start date; skipping");
        return Vec::new();
    };

    if date >= bounds.month_start && date <= bounds.month_end {
        vec![date]
    } else {
        Vec::new()
    }
}
