//! Turns expanded dates into fully-formed calendar events.

use chrono::NaiveDate;

use crate::models::event::{EventType, Location, StudyCalendarEvent};
use crate::models::study::{RecurrenceType, Study, StudyStatus};
use crate::models::theme::ColorTheme;
use crate::services::theme;
use crate::utils::date::parse_date;

use super::parser::TimeRange;
use super::recurrence::ExpansionBounds;

const RECRUITMENT_DISPLAY_TIME: &str = "23:59";

/// One event per expanded occurrence date. One-off sessions are `special`;
/// every repeating cadence produces `regular` entries.
pub(super) fn occurrence_event(
    study: &Study,
    kind: RecurrenceType,
    date: NaiveDate,
    times: &TimeRange,
    location: Option<Location>,
    color: ColorTheme,
) -> StudyCalendarEvent {
    let event_type = match kind {
        RecurrenceType::OneTime => EventType::Special,
        _ => EventType::Regular,
    };

    StudyCalendarEvent {
        id: event_id(&study.id, date, event_type),
        study_id: study.id.clone(),
        study_slug: study.slug.clone(),
        study_name: study.name.clone(),
        title: format!("{} {}기", study.name, study.generation),
        date,
        start_time: times.start_hhmm(),
        end_time: times.end_hhmm(),
        event_type,
        study_type: study.slug.clone(),
        location,
        description: occurrence_description(study, kind),
        participant_limit: study.capacity,
        current_participants: study.enrolled,
        color,
    }
}

/// Synthetic application-deadline marker: only for approved studies whose
/// parsed deadline falls inside the target month. Carries the fixed
/// recruitment theme and display time rather than the study's own.
pub(super) fn recruitment_event(
    study: &Study,
    bounds: &ExpansionBounds,
) -> Option<StudyCalendarEvent> {
    if study.status != StudyStatus::Approved {
        return None;
    }

    let deadline = parse_date(study.deadline.as_ref())?.date();
    if deadline < bounds.month_start || deadline > bounds.month_end {
        return None;
    }

    Some(StudyCalendarEvent {
        id: event_id(&study.id, deadline, EventType::Recruitment),
        study_id: study.id.clone(),
        study_slug: study.slug.clone(),
        study_name: study.name.clone(),
        title: format!("{} 모집 마감", study.name),
        date: deadline,
        start_time: RECRUITMENT_DISPLAY_TIME.to_string(),
        end_time: None,
        event_type: EventType::Recruitment,
        study_type: study.slug.clone(),
        location: None,
        description: format!("{} {}기 모집이 마감됩니다.", study.name, study.generation),
        participant_limit: None,
        current_participants: None,
        color: theme::RECRUITMENT,
    })
}

fn occurrence_description(study: &Study, kind: RecurrenceType) -> String {
    first_nonempty(&study.tagline)
        .or_else(|| first_nonempty(&study.schedule))
        .map(str::to_string)
        .unwrap_or_else(|| default_description(kind).to_string())
}

fn first_nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn default_description(kind: RecurrenceType) -> &'static str {
    match kind {
        RecurrenceType::Weekly => "정기 모임",
        RecurrenceType::Biweekly => "격주 모임",
        RecurrenceType::Monthly => "월간 모임",
        RecurrenceType::Daily => "일일 모임",
        RecurrenceType::OneTime => "특별 세션",
    }
}

/// Occurrence identity is `(study, date, type)`: re-running the projection
/// for any month always reproduces the same id for the same occurrence.
fn event_id(study_id: &str, date: NaiveDate, event_type: EventType) -> String {
    format!("{}-{}-{}", study_id, date.format("%Y-%m-%d"), event_type.as_str())
}
