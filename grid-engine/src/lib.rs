//! FILENAME: grid-engine/src/lib.rs
//! Timetable grid subsystem.
//!
//! This crate turns a flat collection of schedule rows into the structures
//! the renderer displays. It depends on `schedule` only for the shared data
//! model (ScheduleRow, FilterCriteria).
//!
//! Layers:
//! - `filter`: Predicate filtering and selectable-option listing
//! - `formatter`: Per-row display strings and the cell separator
//! - `engine`: Grid assembly (group, order axes, materialize)
//! - `view`: Renderable output (WHAT we display)
//! - `reconcile`: Courses without a final exam
//! - `table`: Flat table projection of the filtered rows
//!
//! Every layer is a pure function of its inputs; the whole pipeline is
//! recomputed from scratch on each filter change.

pub mod engine;
pub mod filter;
pub mod formatter;
pub mod reconcile;
pub mod table;
pub mod view;

pub use engine::build_grid;
pub use filter::{
    apply_filters, course_options, data_source_options, staff_options, time_slot_options,
};
pub use formatter::{format_cell, CELL_SEPARATOR};
pub use reconcile::courses_without_exam;
pub use table::{build_table, TableView};
pub use view::ScheduleGrid;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use schedule::{FilterCriteria, ScheduleRow, ScheduleType, Weekday};

    // Full pass: filter -> grid -> reconcile, the way a render cycle runs.
    #[test]
    fn render_pass_from_rows_to_grid_and_reconciler() {
        let mut geology = ScheduleRow::new("fall 2025", "GEOL2101", "1", "Geology I");
        geology.staff_name = Some("K. Al Hooti".to_string());
        geology.day = Some(Weekday::Sun);
        geology.time = Some("08:00AM - 08:50AM".to_string());
        geology.exam_date = NaiveDate::from_ymd_opt(2025, 12, 18);
        geology.exam_time = Some("8:00AM - 10:00AM".to_string());

        let mut seminar = ScheduleRow::new("fall 2025", "GEOL6900", "1", "Research Seminar");
        seminar.day = Some(Weekday::Tue);
        seminar.time = Some("02:00PM - 02:50PM".to_string());

        let mut stale = ScheduleRow::new("original", "GEOL2101", "1", "Geology I");
        stale.day = Some(Weekday::Mon);
        stale.time = Some("09:00AM - 09:50AM".to_string());

        let rows = vec![geology, seminar, stale];

        let mut criteria = FilterCriteria::new(ScheduleType::Exam);
        criteria.data_source = Some("fall 2025".to_string());
        let filtered = apply_filters(&rows, &criteria);
        assert_eq!(filtered.len(), 2);

        let grid = build_grid(&filtered, criteria.schedule_type);
        assert_eq!(grid.row_labels, ["8:00AM - 10:00AM"]);
        assert_eq!(grid.col_labels, ["2025-12-18"]);
        assert_eq!(grid.dropped_rows, 1); // the seminar has no exam entry

        assert_eq!(courses_without_exam(&filtered), vec!["GEOL6900"]);
    }
}
