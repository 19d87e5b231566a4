//! Study schedule projection.
//!
//! Entry point of the crate: given study snapshots and a target month,
//! produce the concrete calendar events the UI renders. The pipeline is
//! pure and synchronous — parsers normalize the study's free-text and
//! date fields, per-kind expanders enumerate occurrence dates, and the
//! materializer zips dates with study metadata into event records.
//!
//! A study with malformed schedule data contributes zero events rather
//! than failing the month; the only fallible surface is the month target
//! itself.

use chrono::NaiveDate;
use log::{debug, warn};
use thiserror::Error;

pub mod cache;
mod materializer;
pub mod parser;
mod recurrence;

use crate::models::event::StudyCalendarEvent;
use crate::models::study::Study;
use crate::services::theme::resolve_theme;
use crate::utils::date::{month_bounds, parse_date};

use recurrence::ExpansionBounds;

/// Rejected projection target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("month index {0} is out of range (expected 0..=11)")]
    MonthOutOfRange(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// Inclusive first/last day of the month being projected. Months are
/// addressed by a 0-based index, matching the calendar UI convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthWindow {
    /// Build the window for `(year, month index)`.
    pub fn from_index(year: i32, month0: u32) -> Result<Self, ProjectionError> {
        if month0 > 11 {
            return Err(ProjectionError::MonthOutOfRange(month0));
        }
        let (start, end) =
            month_bounds(year, month0).ok_or(ProjectionError::YearOutOfRange(year))?;
        Ok(Self { start, end })
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Project one study onto a month, ascending by date.
///
/// An invalid month target degrades to an empty result with a warning;
/// use [`MonthWindow::from_index`] directly to handle the error instead.
pub fn study_events(study: &Study, year: i32, month0: u32) -> Vec<StudyCalendarEvent> {
    match MonthWindow::from_index(year, month0) {
        Ok(window) => events_in_window(study, &window),
        Err(err) => {
            warn!("rejecting projection target year={year} month0={month0}: {err}");
            Vec::new()
        }
    }
}

/// Project a set of studies onto a month, merged and stably sorted by
/// date then start time.
pub fn month_events(studies: &[Study], year: i32, month0: u32) -> Vec<StudyCalendarEvent> {
    let window = match MonthWindow::from_index(year, month0) {
        Ok(window) => window,
        Err(err) => {
            warn!("rejecting projection target year={year} month0={month0}: {err}");
            return Vec::new();
        }
    };

    let mut events: Vec<StudyCalendarEvent> = studies
        .iter()
        .flat_map(|study| events_in_window(study, &window))
        .collect();

    events.sort_by(|a, b| (a.date, a.start_time.as_str()).cmp(&(b.date, b.start_time.as_str())));
    events
}

fn events_in_window(study: &Study, window: &MonthWindow) -> Vec<StudyCalendarEvent> {
    let bounds = ExpansionBounds {
        month_start: window.start,
        month_end: window.end,
        study_start: parse_date(study.start_date.as_ref()).map(|dt| dt.date()),
        study_end: parse_date(study.end_date.as_ref()).map(|dt| dt.date()),
    };

    let mut events = match study.recurrence_type {
        Some(kind) => {
            let times = parser::parse_duration(study.duration.as_deref());
            let location =
                parser::parse_location(study.schedule.as_deref(), study.description.as_deref());
            let color = resolve_theme(&study.slug);

            recurrence::expand(kind, study.schedule.as_deref(), &bounds)
                .into_iter()
                .map(|date| {
                    materializer::occurrence_event(study, kind, date, &times, location, color)
                })
                .collect()
        }
        None => {
            debug!(
                "study {} has no recurrence type; only deadline markers apply",
                study.id
            );
            Vec::new()
        }
    };

    events.extend(materializer::recruitment_event(study, &bounds));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventType;
    use crate::models::study::{RecurrenceType, StudyStatus};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn weekly_study() -> Study {
        Study::builder()
            .id("s1")
            .name("테코테코")
            .slug("tecoteco")
            .generation(3)
            .status(StudyStatus::Approved)
            .recurrence_type(RecurrenceType::Weekly)
            .schedule("매주 금요일")
            .duration("19:30-21:30")
            .start_date("2025-01-01")
            .end_date("2025-12-31")
            .build()
            .unwrap()
    }

    #[test]
    fn test_month_window_from_index() {
        let window = MonthWindow::from_index(2025, 0).unwrap();
        assert_eq!(window.start(), ymd(2025, 1, 1));
        assert_eq!(window.end(), ymd(2025, 1, 31));

        assert_eq!(
            MonthWindow::from_index(2025, 12),
            Err(ProjectionError::MonthOutOfRange(12))
        );
    }

    #[test]
    fn test_study_events_invalid_month_degrades_to_empty() {
        assert!(study_events(&weekly_study(), 2025, 42).is_empty());
        assert!(month_events(&[weekly_study()], 2025, 42).is_empty());
    }

    #[test]
    fn test_study_without_recurrence_type_only_emits_deadline() {
        let study = Study::builder()
            .id("s2")
            .name("데브로그")
            .slug("devlog")
            .status(StudyStatus::Approved)
            .deadline("2025-06-20")
            .build()
            .unwrap();

        let events = study_events(&study, 2025, 5);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Recruitment);
    }

    #[test]
    fn test_month_events_merges_and_sorts() {
        let morning = Study::builder()
            .id("m")
            .name("아침 스터디")
            .slug("morning")
            .status(StudyStatus::InProgress)
            .recurrence_type(RecurrenceType::Weekly)
            .schedule("매주 금요일")
            .duration("07:00-08:00")
            .build()
            .unwrap();
        let evening = Study::builder()
            .id("e")
            .name("저녁 스터디")
            .slug("evening")
            .status(StudyStatus::InProgress)
            .recurrence_type(RecurrenceType::Weekly)
            .schedule("매주 금요일")
            .duration("19:00-21:00")
            .build()
            .unwrap();

        // Order of the input set must not leak into the output order.
        let events = month_events(&[evening, morning], 2025, 1);
        assert_eq!(events.len(), 8);
        let mut sorted = events.clone();
        sorted.sort_by(|a, b| {
            (a.date, a.start_time.as_str()).cmp(&(b.date, b.start_time.as_str()))
        });
        assert_eq!(events, sorted);
        assert_eq!(events[0].study_id, "m");
        assert_eq!(events[1].study_id, "e");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let study = weekly_study();
        let first = study_events(&study, 2025, 1);
        let second = study_events(&study, 2025, 1);
        assert_eq!(first, second);
    }
}
