// Test fixtures - reusable study data
// Provides consistent studies across all integration test files

use study_calendar::models::study::{RecurrenceType, Study, StudyStatus};

/// Weekly Friday-evening study running through all of 2025.
pub fn weekly_friday_study() -> Study {
    Study::builder()
        .id("study-weekly")
        .name("테코테코")
        .slug("tecoteco")
        .generation(3)
        .status(StudyStatus::InProgress)
        .recurrence_type(RecurrenceType::Weekly)
        .schedule("매주 금요일")
        .duration("19:30-21:30")
        .start_date("2025-01-01")
        .end_date("2025-12-31")
        .build()
        .unwrap()
}

/// Single special session on 2025-03-15.
pub fn one_time_study() -> Study {
    Study::builder()
        .id("study-onetime")
        .name("모의면접 데이")
        .slug("mock-interview")
        .status(StudyStatus::Approved)
        .recurrence_type(RecurrenceType::OneTime)
        .duration("14:00-18:00")
        .start_date("2025-03-15")
        .build()
        .unwrap()
}

/// Approved study recruiting until 2025-06-20, schedule not yet fixed.
pub fn recruiting_study() -> Study {
    Study::builder()
        .id("study-recruiting")
        .name("데브로그")
        .slug("devlog")
        .generation(2)
        .status(StudyStatus::Approved)
        .deadline("2025-06-20")
        .build()
        .unwrap()
}

/// Daily weekday-morning study for June 2025.
pub fn daily_weekday_study() -> Study {
    Study::builder()
        .id("study-daily")
        .name("11루틴")
        .slug("11routine")
        .status(StudyStatus::InProgress)
        .recurrence_type(RecurrenceType::Daily)
        .schedule("평일 매일 아침 온라인")
        .duration("07:00-08:00")
        .start_date("2025-06-01")
        .end_date("2025-06-30")
        .build()
        .unwrap()
}

/// Biweekly Saturday study, offline.
pub fn biweekly_study() -> Study {
    Study::builder()
        .id("study-biweekly")
        .name("주말 알고리즘")
        .slug("weekend-algo")
        .status(StudyStatus::InProgress)
        .recurrence_type(RecurrenceType::Biweekly)
        .schedule("격주 토요일 대면")
        .duration("10:00-12:00")
        .build()
        .unwrap()
}

/// Monthly first-Monday retrospective meetup.
pub fn monthly_study() -> Study {
    Study::builder()
        .id("study-monthly")
        .name("월간 회고")
        .slug("monthly-retro")
        .status(StudyStatus::InProgress)
        .recurrence_type(RecurrenceType::Monthly)
        .schedule("매월 첫째 주 월요일")
        .duration("20:00-21:00")
        .build()
        .unwrap()
}
