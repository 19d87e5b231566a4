// Property-based tests for recurrence expansion and the free-text parsers

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use study_calendar::models::study::{DateInput, RecurrenceType, Study, StudyStatus};
use study_calendar::services::schedule::parser::{parse_day_of_week, parse_duration};
use study_calendar::services::schedule::{study_events, MonthWindow};
use study_calendar::utils::date::parse_date;

const WEEKDAY_SCHEDULES: &[&str] = &[
    "매주 일요일",
    "매주 월요일",
    "매주 화요일",
    "매주 수요일",
    "매주 목요일",
    "매주 금요일",
    "매주 토요일",
];

fn study(kind: RecurrenceType, schedule: &str) -> Study {
    Study::builder()
        .id("prop-study")
        .name("스터디")
        .slug("prop-study")
        .status(StudyStatus::InProgress)
        .recurrence_type(kind)
        .schedule(schedule)
        .build()
        .unwrap()
}

proptest! {
    /// Weekly occurrences are always exactly 7 days apart.
    #[test]
    fn prop_weekly_gap_is_seven_days(
        year in 2020..2032i32,
        month0 in 0..12u32,
        day_index in 0..7usize,
    ) {
        let events = study_events(
            &study(RecurrenceType::Weekly, WEEKDAY_SCHEDULES[day_index]),
            year,
            month0,
        );

        // Every month holds at least four of each weekday.
        prop_assert!(events.len() >= 4);
        for pair in events.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(7));
        }
    }

    /// Biweekly occurrences are always exactly 14 days apart.
    #[test]
    fn prop_biweekly_gap_is_fourteen_days(
        year in 2020..2032i32,
        month0 in 0..12u32,
        day_index in 0..7usize,
    ) {
        let events = study_events(
            &study(RecurrenceType::Biweekly, WEEKDAY_SCHEDULES[day_index]),
            year,
            month0,
        );

        prop_assert!(events.len() >= 2);
        for pair in events.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(14));
        }
    }

    /// Every generated date falls inside both the target month and the
    /// study's active window, regardless of how the window sits relative
    /// to the month (including inverted windows, which simply yield
    /// nothing).
    #[test]
    fn prop_dates_clipped_to_month_and_active_window(
        year in 2020..2032i32,
        month0 in 0..12u32,
        start_month0 in 0..12u32,
        start_day in 1..=28u32,
        end_month0 in 0..12u32,
        end_day in 1..=28u32,
    ) {
        let start = NaiveDate::from_ymd_opt(year, start_month0 + 1, start_day).unwrap();
        let end = NaiveDate::from_ymd_opt(year, end_month0 + 1, end_day).unwrap();

        let mut study = study(RecurrenceType::Daily, "매일");
        study.start_date = Some(start.into());
        study.end_date = Some(end.into());

        let window = MonthWindow::from_index(year, month0).unwrap();
        for event in study_events(&study, year, month0) {
            prop_assert!(event.date >= window.start());
            prop_assert!(event.date <= window.end());
            prop_assert!(event.date >= start);
            prop_assert!(event.date <= end);
        }
    }

    /// Projection has no hidden clock or randomness dependency.
    #[test]
    fn prop_projection_is_idempotent(
        year in 2020..2032i32,
        month0 in 0..12u32,
        day_index in 0..7usize,
    ) {
        let study = study(RecurrenceType::Weekly, WEEKDAY_SCHEDULES[day_index]);
        prop_assert_eq!(
            study_events(&study, year, month0),
            study_events(&study, year, month0)
        );
    }

    /// Date normalization is total over arbitrary strings.
    #[test]
    fn prop_parse_date_never_panics(text in ".*") {
        let _ = parse_date(Some(&DateInput::Iso(text)));
    }

    /// Tuple normalization is total over arbitrary component lists.
    #[test]
    fn prop_parse_date_tuple_never_panics(parts in proptest::collection::vec(any::<i64>(), 0..8)) {
        let _ = parse_date(Some(&DateInput::Tuple(parts)));
    }

    /// Whatever the input, the parsed start time formats as valid HH:MM.
    #[test]
    fn prop_parse_duration_start_is_valid_hhmm(text in ".*") {
        let range = parse_duration(Some(&text));
        let formatted = range.start_hhmm();
        prop_assert_eq!(formatted.len(), 5);
        prop_assert!(formatted.as_bytes()[2] == b':');
        prop_assert!(chrono::NaiveTime::parse_from_str(&formatted, "%H:%M").is_ok());
    }

    /// Weekday extraction is total and never invents a day for dayless text.
    #[test]
    fn prop_parse_day_of_week_total(text in "[a-z0-9 ]*") {
        // Alphanumeric noise may still contain an English token ("sun" in
        // "sunset"); the property is only that nothing panics and that
        // dayless text maps to None.
        let result = parse_day_of_week(&text);
        if result.is_some() {
            let lowered = text.to_lowercase();
            prop_assert!(
                ["sun", "mon", "tue", "wed", "thu", "fri", "sat"]
                    .iter()
                    .any(|token| lowered.contains(token))
            );
        }
    }
}
