//! FILENAME: grid-engine/src/table.rs
//! PURPOSE: Flat table projection of the filtered rows.
//! CONTEXT: The detail listing behind Table View: the filtered rows
//! verbatim, numbered from 1, with the data-source column dropped (it is
//! already pinned by the source selector). Exam mode keeps one row per
//! course.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use schedule::{ScheduleRow, ScheduleType};

/// Column headers of the table view, after the leading row number.
const TABLE_HEADERS: [&str; 10] = [
    "Level",
    "Course Code",
    "Section",
    "Staff Name",
    "Hall",
    "Day",
    "Time",
    "Exam Date",
    "Exam Time",
    "Course Name",
];

/// The flat detail listing, ready for tabular rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Column headers; the first is the row-number column.
    pub headers: Vec<String>,

    /// One string row per schedule row, first cell the 1-based number.
    pub rows: Vec<Vec<String>>,
}

/// Projects the filtered rows into the flat table view.
pub fn build_table(rows: &[ScheduleRow], schedule_type: ScheduleType) -> TableView {
    let mut headers = vec!["#".to_string()];
    headers.extend(TABLE_HEADERS.iter().map(|h| h.to_string()));

    let mut seen_courses: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();

    for row in rows {
        if schedule_type == ScheduleType::Exam && !seen_courses.insert(row.course_code.as_str()) {
            continue;
        }
        out.push(project_row(out.len() + 1, row));
    }

    TableView { headers, rows: out }
}

fn project_row(number: usize, row: &ScheduleRow) -> Vec<String> {
    vec![
        number.to_string(),
        row.level.map(|l| l.label().to_string()).unwrap_or_default(),
        row.course_code.clone(),
        row.section.clone(),
        row.staff_name.clone().unwrap_or_default(),
        row.hall.clone().unwrap_or_default(),
        row.day.map(|d| d.label().to_string()).unwrap_or_default(),
        row.time.clone().unwrap_or_default(),
        row.exam_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        row.exam_time.clone().unwrap_or_default(),
        row.course_name.clone(),
    ]
}
