//! FILENAME: grid-engine/src/filter.rs
//! PURPOSE: The filter stage - reduces the row collection to the selection.
//! CONTEXT: Filters combine with AND across dimensions and OR within a
//! multi-select. An empty selection for a dimension is a pass-through, so an
//! untouched sidebar shows the full schedule. An empty result set is valid
//! and flows through to an empty grid.

use schedule::{FilterCriteria, ScheduleRow, ScheduleType};

// ============================================================================
// ROW FILTERING
// ============================================================================

/// Returns the rows satisfying every selected criterion.
///
/// Rows keep their input order; the grid builder relies on that order for
/// stable cell merging.
pub fn apply_filters(rows: &[ScheduleRow], criteria: &FilterCriteria) -> Vec<ScheduleRow> {
    rows.iter()
        .filter(|row| matches_criteria(row, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(row: &ScheduleRow, criteria: &FilterCriteria) -> bool {
    if let Some(source) = &criteria.data_source {
        if &row.data_source != source {
            return false;
        }
    }

    if let Some(level) = criteria.level {
        if row.level != Some(level) {
            return false;
        }
    }

    if !criteria.courses.is_empty() && !criteria.courses.contains(&row.course_code) {
        return false;
    }

    if !criteria.staff.is_empty() {
        // A row with no instructor can never match a staff selection.
        match &row.staff_name {
            Some(name) => {
                if !criteria.staff.contains(name) {
                    return false;
                }
            }
            None => return false,
        }
    }

    if !criteria.time_slots.is_empty() {
        let slot = match criteria.schedule_type {
            ScheduleType::Lecture => row.time.as_ref(),
            ScheduleType::Exam => row.exam_time.as_ref(),
        };
        match slot {
            Some(slot) => {
                if !criteria.time_slots.contains(slot) {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

// ============================================================================
// SELECTABLE OPTION LISTS
// ============================================================================

/// Distinct data-source tags, sorted. Feeds the source selector.
pub fn data_source_options(rows: &[ScheduleRow]) -> Vec<String> {
    sorted_unique(rows.iter().map(|row| row.data_source.as_str()))
}

/// Distinct instructor names, sorted. Rows with no instructor contribute
/// nothing - the absent sentinel is never a selectable value.
pub fn staff_options(rows: &[ScheduleRow]) -> Vec<String> {
    sorted_unique(rows.iter().filter_map(|row| row.staff_name.as_deref()))
}

/// Distinct course codes, sorted.
pub fn course_options(rows: &[ScheduleRow]) -> Vec<String> {
    sorted_unique(rows.iter().map(|row| row.course_code.as_str()))
}

/// Distinct time-slot labels for the given schedule type, sorted.
pub fn time_slot_options(rows: &[ScheduleRow], schedule_type: ScheduleType) -> Vec<String> {
    match schedule_type {
        ScheduleType::Lecture => {
            sorted_unique(rows.iter().filter_map(|row| row.time.as_deref()))
        }
        ScheduleType::Exam => {
            sorted_unique(rows.iter().filter_map(|row| row.exam_time.as_deref()))
        }
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule::{Level, ScheduleRow, Weekday};

    fn create_test_rows() -> Vec<ScheduleRow> {
        let mut physics = ScheduleRow::new("fall 2025", "PHYS1101", "1", "Physics I");
        physics.level = Some(Level::UG);
        physics.staff_name = Some("A. Rashid".to_string());
        physics.day = Some(Weekday::Sun);
        physics.time = Some("08:00AM - 08:50AM".to_string());

        let mut geology = ScheduleRow::new("fall 2025", "GEOL2101", "1", "Geology I");
        geology.level = Some(Level::UG);
        geology.staff_name = Some("K. Al Hooti".to_string());
        geology.day = Some(Weekday::Mon);
        geology.time = Some("10:00AM - 10:50AM".to_string());

        let mut seminar = ScheduleRow::new("original", "GEOL6900", "1", "Research Seminar");
        seminar.level = Some(Level::PG);
        seminar.day = Some(Weekday::Tue);
        seminar.time = Some("02:00PM - 02:50PM".to_string());

        vec![physics, geology, seminar]
    }

    #[test]
    fn empty_criteria_passes_everything_through() {
        let rows = create_test_rows();
        let filtered = apply_filters(&rows, &FilterCriteria::default());
        assert_eq!(filtered.len(), rows.len());
    }

    #[test]
    fn dimensions_combine_with_and() {
        let rows = create_test_rows();
        let mut criteria = FilterCriteria::default();
        criteria.data_source = Some("fall 2025".to_string());
        criteria.level = Some(Level::UG);
        criteria.staff = vec!["K. Al Hooti".to_string()];

        let filtered = apply_filters(&rows, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].course_code, "GEOL2101");
    }

    #[test]
    fn multi_select_combines_with_or() {
        let rows = create_test_rows();
        let mut criteria = FilterCriteria::default();
        criteria.courses = vec!["PHYS1101".to_string(), "GEOL6900".to_string()];

        let filtered = apply_filters(&rows, &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn staff_selection_never_matches_rows_without_an_instructor() {
        let rows = create_test_rows();
        let mut criteria = FilterCriteria::default();
        criteria.staff = vec!["K. Al Hooti".to_string()];

        let filtered = apply_filters(&rows, &criteria);
        assert!(filtered.iter().all(|row| row.staff_name.is_some()));
    }

    #[test]
    fn filters_on_exam_time_when_in_exam_mode() {
        let mut rows = create_test_rows();
        rows[0].exam_time = Some("8:00AM - 10:00AM".to_string());

        let mut criteria = FilterCriteria::new(ScheduleType::Exam);
        criteria.time_slots = vec!["8:00AM - 10:00AM".to_string()];

        let filtered = apply_filters(&rows, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].course_code, "PHYS1101");
    }

    #[test]
    fn filtering_everything_out_is_not_an_error() {
        let rows = create_test_rows();
        let mut criteria = FilterCriteria::default();
        criteria.data_source = Some("spring 1999".to_string());
        assert!(apply_filters(&rows, &criteria).is_empty());
    }

    #[test]
    fn option_lists_skip_absent_values_and_sort() {
        let rows = create_test_rows();
        assert_eq!(
            staff_options(&rows),
            vec!["A. Rashid".to_string(), "K. Al Hooti".to_string()]
        );
        assert_eq!(
            data_source_options(&rows),
            vec!["fall 2025".to_string(), "original".to_string()]
        );
    }

    #[test]
    fn time_slot_options_follow_the_schedule_type() {
        let mut rows = create_test_rows();
        rows[1].exam_time = Some("11:00AM - 1:00PM".to_string());

        let lecture = time_slot_options(&rows, ScheduleType::Lecture);
        assert_eq!(lecture.len(), 3);

        let exam = time_slot_options(&rows, ScheduleType::Exam);
        assert_eq!(exam, vec!["11:00AM - 1:00PM".to_string()]);
    }
}
