//! FILENAME: grid-engine/src/engine.rs
//! Grid builder - the calculation core that turns filtered rows into a view.
//!
//! Algorithm:
//! 1. Select the grouping keys: (time, day) for lectures, (exam time, exam
//!    date) for exams; rows missing either key cannot be placed and are
//!    dropped (counted, logged at debug).
//! 2. Exam only: deduplicate by course code before grouping, first
//!    occurrence wins, so a course with several sections or instructors
//!    appears once.
//! 3. Group rows by (row key, col key); a group keeps every entry in stable
//!    input order, joined by the cell separator.
//! 4. Order the axes: lecture rows lexically, lecture columns in the fixed
//!    teaching-week order; exam rows chronologically by parsed slot start
//!    (unparsable labels last, input order preserved among them), exam
//!    columns by ascending date.
//! 5. Materialize the complete row x col cell matrix with empty strings for
//!    absent combinations.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use schedule::{parse_slot_start, ScheduleRow, ScheduleType, DAY_ORDER};

use crate::formatter::{format_cell, CELL_SEPARATOR};
use crate::view::ScheduleGrid;

/// Formatted entries sharing one (row, col) position. Co-taught or split
/// sections make two-entry cells common; more is rare.
type CellEntries = SmallVec<[String; 2]>;

/// Group map from (row label, col label) to the entries placed there.
type GroupMap = FxHashMap<(String, String), CellEntries>;

/// Builds the timetable grid for the given schedule type.
///
/// Pure and deterministic: the same rows and type always produce the same
/// grid, and the input is never mutated. An empty or fully-dropped row set
/// yields an empty grid, never an error.
pub fn build_grid(rows: &[ScheduleRow], schedule_type: ScheduleType) -> ScheduleGrid {
    match schedule_type {
        ScheduleType::Lecture => build_lecture_grid(rows),
        ScheduleType::Exam => build_exam_grid(rows),
    }
}

// ============================================================================
// LECTURE GRID
// ============================================================================

fn build_lecture_grid(rows: &[ScheduleRow]) -> ScheduleGrid {
    let mut groups = GroupMap::default();
    // BTreeSet keeps the row axis in lexical order; the zero-padded
    // labels make that chronological in practice.
    let mut times: BTreeSet<String> = BTreeSet::new();
    let mut dropped = 0usize;

    for row in rows {
        let (Some(day), Some(time)) = (row.day, row.time.as_ref()) else {
            dropped += 1;
            continue;
        };
        times.insert(time.clone());
        groups
            .entry((time.clone(), day.label().to_string()))
            .or_default()
            .push(format_cell(row, ScheduleType::Lecture));
    }

    if dropped > 0 {
        debug!("lecture grid: {dropped} row(s) had no day/time and were not placed");
    }

    if groups.is_empty() {
        let mut grid = ScheduleGrid::empty();
        grid.dropped_rows = dropped;
        return grid;
    }

    let row_labels: Vec<String> = times.into_iter().collect();
    // The column axis is always the full teaching week; days with no
    // entries render as empty columns.
    let col_labels: Vec<String> = DAY_ORDER.iter().map(|d| d.label().to_string()).collect();

    materialize(row_labels, col_labels, groups, dropped)
}

// ============================================================================
// EXAM GRID
// ============================================================================

fn build_exam_grid(rows: &[ScheduleRow]) -> ScheduleGrid {
    let mut groups = GroupMap::default();
    let mut time_labels: Vec<String> = Vec::new();
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut seen_courses: FxHashSet<&str> = FxHashSet::default();
    let mut dropped = 0usize;

    for row in rows {
        let (Some(date), Some(time)) = (row.exam_date, row.exam_time.as_ref()) else {
            dropped += 1;
            continue;
        };
        // One entry per course: first occurrence wins.
        if !seen_courses.insert(row.course_code.as_str()) {
            continue;
        }
        if !time_labels.iter().any(|label| label == time) {
            time_labels.push(time.clone());
        }
        dates.insert(date);
        groups
            .entry((time.clone(), format_exam_date(date)))
            .or_default()
            .push(format_cell(row, ScheduleType::Exam));
    }

    if dropped > 0 {
        debug!("exam grid: {dropped} row(s) had no exam date/time and were not placed");
    }

    if groups.is_empty() {
        let mut grid = ScheduleGrid::empty();
        grid.dropped_rows = dropped;
        return grid;
    }

    let row_labels = order_exam_slots(time_labels);
    let col_labels: Vec<String> = dates.into_iter().map(format_exam_date).collect();

    materialize(row_labels, col_labels, groups, dropped)
}

fn format_exam_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Orders exam slot labels by their parsed start time. Labels that fail to
/// parse sort after every parsed label; the sort is stable, so unparsable
/// labels keep their relative input order.
fn order_exam_slots(labels: Vec<String>) -> Vec<String> {
    let mut keyed: Vec<(Option<NaiveTime>, String)> = labels
        .into_iter()
        .map(|label| {
            let start = parse_slot_start(&label);
            if start.is_none() {
                warn!("exam grid: time slot label {label:?} is not a clock range, ordering it last");
            }
            (start, label)
        })
        .collect();
    keyed.sort_by_key(|(start, _)| (start.is_none(), *start));
    keyed.into_iter().map(|(_, label)| label).collect()
}

// ============================================================================
// MATERIALIZATION
// ============================================================================

/// Expands the sparse group map into the complete row-major cell matrix.
fn materialize(
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    groups: GroupMap,
    dropped: usize,
) -> ScheduleGrid {
    let row_index: FxHashMap<&str, usize> = row_labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();
    let col_index: FxHashMap<&str, usize> = col_labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let mut cells = vec![vec![String::new(); col_labels.len()]; row_labels.len()];
    for ((row_label, col_label), entries) in groups {
        // Both lookups always hit: the axes were collected from the same
        // rows the groups were.
        if let (Some(&row), Some(&col)) = (
            row_index.get(row_label.as_str()),
            col_index.get(col_label.as_str()),
        ) {
            cells[row][col] = entries.join(CELL_SEPARATOR);
        }
    }

    ScheduleGrid {
        row_labels,
        col_labels,
        cells,
        dropped_rows: dropped,
    }
}
