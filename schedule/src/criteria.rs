//! FILENAME: schedule/src/criteria.rs
//! PURPOSE: Filter criteria - the serializable snapshot of user selection.
//! CONTEXT: The UI collaborator builds one of these per render pass and
//! hands it to the grid engine. Immutable once built; a new snapshot is
//! created every time a selection changes.

use serde::{Deserialize, Serialize};

use crate::row::Level;

// ============================================================================
// SCHEDULE TYPE AND VIEW MODE
// ============================================================================

/// Which schedule the grid presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleType {
    /// Regular weekly classes, pivoted by (time, day).
    Lecture,
    /// Final exams, pivoted by (exam time, exam date).
    Exam,
}

impl Default for ScheduleType {
    fn default() -> Self {
        ScheduleType::Lecture
    }
}

/// How the filtered rows are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Visual timetable grid.
    Schedule,
    /// Flat detail listing.
    Table,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Schedule
    }
}

// ============================================================================
// FILTER CRITERIA
// ============================================================================

/// A snapshot of all selected filter values for one render pass.
///
/// Every dimension is optional: `None` / an empty list means "no constraint"
/// for that dimension, never "match nothing". Within a multi-select list the
/// values combine with OR; across dimensions the filters combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected schedule dataset; None passes every data source through.
    pub data_source: Option<String>,

    /// Selected academic level; None means "Both".
    pub level: Option<Level>,

    /// Selected course codes (multi-select).
    pub courses: Vec<String>,

    /// Selected instructor names (multi-select).
    pub staff: Vec<String>,

    /// Selected time-slot labels (multi-select). Interpreted against the
    /// lecture or exam time column depending on `schedule_type`.
    pub time_slots: Vec<String>,

    /// Which schedule the pass renders.
    pub schedule_type: ScheduleType,

    /// Grid or flat-table presentation.
    pub view_mode: ViewMode,
}

impl FilterCriteria {
    /// Creates an unconstrained criteria snapshot for the given schedule type.
    pub fn new(schedule_type: ScheduleType) -> Self {
        FilterCriteria {
            schedule_type,
            ..FilterCriteria::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.data_source.is_none());
        assert!(criteria.level.is_none());
        assert!(criteria.courses.is_empty());
        assert!(criteria.staff.is_empty());
        assert!(criteria.time_slots.is_empty());
        assert_eq!(criteria.schedule_type, ScheduleType::Lecture);
        assert_eq!(criteria.view_mode, ViewMode::Schedule);
    }
}
