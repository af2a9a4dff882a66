//! FILENAME: schedule/src/row.rs
//! PURPOSE: The schedule row - one scheduled meeting or exam entry.
//! CONTEXT: Rows come from the sheet source already normalized: absent or
//! sentinel values ("nan", blanks) arrive as None, never as marker strings.
//! Rows are read-only for the duration of a render pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// LEVEL
// ============================================================================

/// Academic level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Undergraduate.
    UG,
    /// Postgraduate.
    PG,
}

impl Level {
    /// Parses a level from a raw sheet cell. Case-insensitive; anything
    /// other than UG/PG is treated as absent.
    pub fn parse(raw: &str) -> Option<Level> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "UG" => Some(Level::UG),
            "PG" => Some(Level::PG),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::UG => "UG",
            Level::PG => "PG",
        }
    }
}

// ============================================================================
// WEEKDAY
// ============================================================================

/// Teaching days of the week, in the fixed display order used by the
/// lecture grid's column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
}

/// Column order for the lecture grid. Days absent from the data still get a
/// column of empty cells.
pub const DAY_ORDER: [Weekday; 5] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
];

impl Weekday {
    /// Parses a weekday from a raw sheet cell (three-letter name,
    /// case-insensitive).
    pub fn parse(raw: &str) -> Option<Weekday> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SUN" => Some(Weekday::Sun),
            "MON" => Some(Weekday::Mon),
            "TUE" => Some(Weekday::Tue),
            "WED" => Some(Weekday::Wed),
            "THU" => Some(Weekday::Thu),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
        }
    }
}

// ============================================================================
// SCHEDULE ROW
// ============================================================================

/// One scheduled meeting or exam entry from the course-schedule sheet.
///
/// A row is usable as a lecture entry (has day+time), as an exam entry
/// (has exam_date+exam_time), as both, or as neither. A course with no exam
/// date is valid and expected - the no-exam reconciler reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Which schedule dataset this row belongs to (e.g. original vs. updated).
    pub data_source: String,

    /// Academic level, when the sheet carries a Level column.
    pub level: Option<Level>,

    /// Course code (e.g. "GEOL2101").
    pub course_code: String,

    /// Section identifier within the course.
    pub section: String,

    /// Instructor name; absent for unassigned sections.
    pub staff_name: Option<String>,

    /// Lecture hall / room.
    pub hall: Option<String>,

    /// Teaching day, when the row is a lecture entry.
    pub day: Option<Weekday>,

    /// Lecture time-slot label (e.g. "10:00AM - 10:50AM").
    pub time: Option<String>,

    /// Final exam date, when the course has one.
    pub exam_date: Option<NaiveDate>,

    /// Exam time-slot label (e.g. "1:00PM - 3:00PM").
    pub exam_time: Option<String>,

    /// Full course name.
    pub course_name: String,
}

impl ScheduleRow {
    /// Creates a row with only the always-present fields set.
    pub fn new(
        data_source: impl Into<String>,
        course_code: impl Into<String>,
        section: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        ScheduleRow {
            data_source: data_source.into(),
            level: None,
            course_code: course_code.into(),
            section: section.into(),
            staff_name: None,
            hall: None,
            day: None,
            time: None,
            exam_date: None,
            exam_time: None,
            course_name: course_name.into(),
        }
    }

    /// Whether this row can be placed in the lecture grid.
    pub fn is_lecture_entry(&self) -> bool {
        self.day.is_some() && self.time.is_some()
    }

    /// Whether this row can be placed in the exam grid.
    pub fn is_exam_entry(&self) -> bool {
        self.exam_date.is_some() && self.exam_time.is_some()
    }
}
