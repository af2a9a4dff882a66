//! FILENAME: schedule/src/lib.rs
//! PURPOSE: Shared data model for the timetable system.
//! CONTEXT: Re-exports the row, criteria, and time-slot types consumed by
//! the source, grid-engine, and format crates.

pub mod criteria;
pub mod row;
pub mod timeslot;

// Re-export commonly used types at the crate root
pub use criteria::{FilterCriteria, ScheduleType, ViewMode};
pub use row::{Level, ScheduleRow, Weekday, DAY_ORDER};
pub use timeslot::parse_slot_start;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_a_lecture_row() {
        let row = ScheduleRow::new("fall 2025", "GEOL2101", "1", "Geology I");
        assert!(!row.is_lecture_entry());
        assert!(!row.is_exam_entry());
    }
}
