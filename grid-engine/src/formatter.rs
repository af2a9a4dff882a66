//! FILENAME: grid-engine/src/formatter.rs
//! PURPOSE: Cell formatter - maps one row to its display string.
//! CONTEXT: Pure per-row mapping. Missing optional fields render as empty
//! string rather than failing; the renderer collapses blank lines as it
//! sees fit.

use schedule::{ScheduleRow, ScheduleType};

/// Structural separator between merged entries in one grid cell.
///
/// The renderer splits on this exact sequence and draws a divider. It must
/// never occur inside legitimate cell content; course codes, names, and
/// halls come from single sheet cells and cannot contain it.
pub const CELL_SEPARATOR: &str = "\n---\n";

/// Formats one row for display in a grid cell.
///
/// Lecture cells carry course, section, instructor, and hall; exam cells
/// only course and instructor (the date and slot are the grid axes).
pub fn format_cell(row: &ScheduleRow, schedule_type: ScheduleType) -> String {
    let staff = row.staff_name.as_deref().unwrap_or("");
    match schedule_type {
        ScheduleType::Lecture => {
            let hall = row.hall.as_deref().unwrap_or("");
            format!("{} ({})\n{}\n{}", row.course_code, row.section, staff, hall)
        }
        ScheduleType::Exam => format!("{}\n{}", row.course_code, staff),
    }
}
