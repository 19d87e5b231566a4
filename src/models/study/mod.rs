// Study module
// Snapshot of a study group as delivered by the community backend

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

/// Cadence at which a study meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceType {
    OneTime,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

/// Lifecycle state assigned by the backend's review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyStatus {
    Pending,
    Approved,
    InProgress,
    Completed,
    Rejected,
    Terminated,
}

/// Date-like field as the backend serializes it: a `[year, month, day,
/// hour?, minute?, second?]` tuple (month is 1-based), an exact timestamp,
/// or an ISO-ish string. Normalized by `utils::date::parse_date` and never
/// inspected anywhere else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Tuple(Vec<i64>),
    Native(NaiveDateTime),
    Iso(String),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Iso(value.to_owned())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Native(value.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Native(value)
    }
}

/// Error decoding a study payload fetched from the backend.
#[derive(Debug, Error)]
pub enum StudyDecodeError {
    #[error("failed to decode study payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A study as the projection core reads it. Optional fields stay optional:
/// the backend omits most of them for draft proposals, and expansion
/// degrades gracefully when they are missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_generation")]
    pub generation: u32,
    pub status: StudyStatus,
    #[serde(default)]
    pub recurrence_type: Option<RecurrenceType>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateInput>,
    #[serde(default)]
    pub end_date: Option<DateInput>,
    #[serde(default)]
    pub deadline: Option<DateInput>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub enrolled: Option<u32>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_generation() -> u32 {
    1
}

impl Study {
    /// Create a study with the required fields.
    ///
    /// # Examples
    /// ```
    /// use study_calendar::models::study::{Study, StudyStatus};
    ///
    /// let study = Study::new("study-1", "테코테코", "tecoteco", StudyStatus::Approved).unwrap();
    /// assert_eq!(study.generation, 1);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        status: StudyStatus,
    ) -> Result<Self, String> {
        let study = Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            generation: default_generation(),
            status,
            recurrence_type: None,
            schedule: None,
            duration: None,
            start_date: None,
            end_date: None,
            deadline: None,
            capacity: None,
            enrolled: None,
            tagline: None,
            description: None,
        };
        study.validate()?;
        Ok(study)
    }

    /// Create a builder for constructing studies with optional fields
    pub fn builder() -> StudyBuilder {
        StudyBuilder::new()
    }

    /// Validate the study
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Study id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("Study name cannot be empty".to_string());
        }
        Ok(())
    }

    /// Decode a single study from a backend JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, StudyDecodeError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decode a list of studies from a backend JSON payload.
    pub fn list_from_json(payload: &str) -> Result<Vec<Self>, StudyDecodeError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Builder for creating studies with optional fields
pub struct StudyBuilder {
    id: Option<String>,
    name: Option<String>,
    slug: Option<String>,
    generation: u32,
    status: StudyStatus,
    recurrence_type: Option<RecurrenceType>,
    schedule: Option<String>,
    duration: Option<String>,
    start_date: Option<DateInput>,
    end_date: Option<DateInput>,
    deadline: Option<DateInput>,
    capacity: Option<u32>,
    enrolled: Option<u32>,
    tagline: Option<String>,
    description: Option<String>,
}

impl StudyBuilder {
    /// Create a new study builder
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            slug: None,
            generation: default_generation(),
            status: StudyStatus::Pending,
            recurrence_type: None,
            schedule: None,
            duration: None,
            start_date: None,
            end_date: None,
            deadline: None,
            capacity: None,
            enrolled: None,
            tagline: None,
            description: None,
        }
    }

    /// Set the study id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the URL slug
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the generation number
    pub fn generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    /// Set the lifecycle status
    pub fn status(mut self, status: StudyStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the recurrence cadence
    pub fn recurrence_type(mut self, recurrence_type: RecurrenceType) -> Self {
        self.recurrence_type = Some(recurrence_type);
        self
    }

    /// Set the free-text schedule description
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    /// Set the free-text meeting time range
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the active-window start date
    pub fn start_date(mut self, start_date: impl Into<DateInput>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    /// Set the active-window end date
    pub fn end_date(mut self, end_date: impl Into<DateInput>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Set the recruitment deadline
    pub fn deadline(mut self, deadline: impl Into<DateInput>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Set the participant capacity
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the enrolled participant count
    pub fn enrolled(mut self, enrolled: u32) -> Self {
        self.enrolled = Some(enrolled);
        self
    }

    /// Set the one-line tagline
    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the long-form description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the study
    pub fn build(self) -> Result<Study, String> {
        let id = self.id.ok_or("Study id is required")?;
        let name = self.name.ok_or("Study name is required")?;

        let study = Study {
            id,
            name,
            slug: self.slug.unwrap_or_default(),
            generation: self.generation,
            status: self.status,
            recurrence_type: self.recurrence_type,
            schedule: self.schedule,
            duration: self.duration,
            start_date: self.start_date,
            end_date: self.end_date,
            deadline: self.deadline,
            capacity: self.capacity,
            enrolled: self.enrolled,
            tagline: self.tagline,
            description: self.description,
        };

        study.validate()?;
        Ok(study)
    }
}

impl Default for StudyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
