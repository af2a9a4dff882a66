//! FILENAME: grid-engine/src/reconcile.rs
//! PURPOSE: No-exam reconciler - courses lacking any exam-date entry.
//! CONTEXT: Supplementary listing shown under the exam grid. Computed off
//! the filtered rows, independently of the grid; it never affects grid
//! content.

use rustc_hash::FxHashSet;
use schedule::ScheduleRow;

/// Returns the course codes that appear in the rows but never with an exam
/// date, lexicographically sorted.
pub fn courses_without_exam(rows: &[ScheduleRow]) -> Vec<String> {
    let with_exam: FxHashSet<&str> = rows
        .iter()
        .filter(|row| row.exam_date.is_some())
        .map(|row| row.course_code.as_str())
        .collect();

    let all: FxHashSet<&str> = rows.iter().map(|row| row.course_code.as_str()).collect();

    let mut missing: Vec<String> = all
        .difference(&with_exam)
        .map(|code| code.to_string())
        .collect();
    missing.sort();
    missing
}
