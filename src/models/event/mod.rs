// Event module
// Concrete calendar event produced by projecting a study onto a month

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::theme::ColorTheme;

/// Kind of calendar entry. `Regular` and `Special` come out of recurrence
/// expansion; `Recruitment` marks an application deadline. `Orientation`
/// and `Retrospective` are reserved for manually curated entries the UI
/// may inject alongside projected ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Regular,
    Special,
    Recruitment,
    Orientation,
    Retrospective,
}

impl EventType {
    /// Stable lowercase name, used as the event id suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Regular => "regular",
            EventType::Special => "special",
            EventType::Recruitment => "recruitment",
            EventType::Orientation => "orientation",
            EventType::Retrospective => "retrospective",
        }
    }
}

/// Where a study meets. Absence of a value means the schedule text gave
/// no signal either way, which is distinct from an explicit `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Online,
    Offline,
}

/// One concrete occurrence on the calendar, ready for the UI to render.
///
/// `id` is derived from `(study_id, date, event_type)`, so the same
/// occurrence keeps the same id no matter when or how often the
/// projection runs. `date` serializes as a local `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyCalendarEvent {
    pub id: String,
    pub study_id: String,
    pub study_slug: String,
    pub study_name: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub event_type: EventType,
    pub study_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_participants: Option<u32>,
    pub color: ColorTheme,
}
