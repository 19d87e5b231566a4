//! Month-keyed memoization for projected events.
//!
//! The projection core recomputes everything per call; this wrapper is
//! the caller-owned cache the UI layer puts in front of it so month
//! navigation does not re-expand unchanged data. The key couples the
//! study set's ids (in the order given) with the target month — callers
//! must `clear` when study data changes under the same ids.

use std::collections::HashMap;

use crate::models::event::StudyCalendarEvent;
use crate::models::study::Study;

use super::month_events;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectionKey {
    study_ids: Vec<String>,
    year: i32,
    month0: u32,
}

impl ProjectionKey {
    pub fn new(studies: &[Study], year: i32, month0: u32) -> Self {
        Self {
            study_ids: studies.iter().map(|study| study.id.clone()).collect(),
            year,
            month0,
        }
    }
}

/// Plain map-based cache over [`month_events`].
#[derive(Debug, Default)]
pub struct ProjectionCache {
    entries: HashMap<ProjectionKey, Vec<StudyCalendarEvent>>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected events for `(studies, year, month0)`, computed on first
    /// use and replayed from the cache afterwards.
    pub fn events(&mut self, studies: &[Study], year: i32, month0: u32) -> &[StudyCalendarEvent] {
        let key = ProjectionKey::new(studies, year, month0);
        self.entries
            .entry(key)
            .or_insert_with(|| month_events(studies, year, month0))
    }

    /// Drop all cached months.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
