//! FILENAME: sheet-source/src/xlsx_reader.rs
//! PURPOSE: Reads the schedule workbook and resolves its column schema.
//! CONTEXT: The first worksheet holds the schedule; row 0 is the header.
//! Columns are located by exact header name, so column order in the sheet
//! does not matter. Grouping-key columns must exist or no grid can be
//! built; presentation columns may be absent entirely.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use log::debug;
use schedule::{Level, ScheduleRow, Weekday};

use crate::error::SourceError;
use crate::normalize::{cell_date, cell_text};

/// Column positions resolved from the header row.
///
/// Required columns are the grouping keys plus the source tag and course
/// code; the rest degrade to absent per row when the column is missing
/// (the sheet has carried schedules without a Level column).
struct Columns {
    data_source: usize,
    course_code: usize,
    day: usize,
    time: usize,
    exam_date: usize,
    exam_time: usize,
    level: Option<usize>,
    section: Option<usize>,
    staff_name: Option<usize>,
    hall: Option<usize>,
    course_name: Option<usize>,
}

impl Columns {
    fn resolve(header: &[Data]) -> Result<Columns, SourceError> {
        let find = |name: &str| {
            header.iter().position(|cell| match cell {
                Data::String(s) => s.trim() == name,
                _ => false,
            })
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| SourceError::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            data_source: require("Data Source")?,
            course_code: require("Course Code")?,
            day: require("Day")?,
            time: require("Time")?,
            exam_date: require("Exam Date")?,
            exam_time: require("Exam Time")?,
            level: find("Level"),
            section: find("Section"),
            staff_name: find("Staff Name"),
            hall: find("Hall"),
            course_name: find("Course Name"),
        })
    }
}

/// Loads the schedule rows from the first worksheet of an XLSX file.
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduleRow>, SourceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = sheet_names.first().ok_or(SourceError::EmptyWorkbook)?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| SourceError::InvalidFormat(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| SourceError::InvalidFormat("Schedule sheet is empty".to_string()))?;
    let columns = Columns::resolve(header)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for row in rows_iter {
        let Some(course_code) = at(row, columns.course_code) else {
            skipped += 1;
            continue;
        };

        let mut entry = ScheduleRow::new(
            at(row, columns.data_source).unwrap_or_default(),
            course_code,
            at_opt(row, columns.section).unwrap_or_default(),
            at_opt(row, columns.course_name).unwrap_or_default(),
        );
        entry.level = at_opt(row, columns.level).and_then(|s| Level::parse(&s));
        entry.staff_name = at_opt(row, columns.staff_name);
        entry.hall = at_opt(row, columns.hall);
        entry.day = at(row, columns.day).and_then(|s| Weekday::parse(&s));
        entry.time = at(row, columns.time);
        entry.exam_date = row.get(columns.exam_date).and_then(cell_date);
        entry.exam_time = at(row, columns.exam_time);

        rows.push(entry);
    }

    if skipped > 0 {
        debug!("schedule sheet: skipped {skipped} row(s) with no course code");
    }

    Ok(rows)
}

fn at(row: &[Data], index: usize) -> Option<String> {
    row.get(index).and_then(cell_text)
}

fn at_opt(row: &[Data], index: Option<usize>) -> Option<String> {
    index.and_then(|i| row.get(i)).and_then(cell_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_xlsxwriter::Workbook;

    const HEADERS: [&str; 11] = [
        "Data Source",
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

    fn write_workbook(rows: &[[&str; 11]]) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in HEADERS.iter().enumerate() {
            sheet.write(0, col as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write(r as u32 + 1, c as u16, *value).unwrap();
            }
        }
        workbook.save(file.path()).unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_rows() {
        let file = write_workbook(&[
            [
                "fall 2025",
                "UG",
                "GEOL2101",
                "1",
                "K. Al Hooti",
                "Hall 4",
                "SUN",
                "08:00AM - 08:50AM",
                "2025-12-18",
                "8:00AM - 10:00AM",
                "Geology I",
            ],
            [
                "fall 2025",
                "nan",
                "GEOL6900",
                "1",
                "nan",
                "",
                "nan",
                "",
                "",
                "",
                "Research Seminar",
            ],
        ]);

        let rows = load_schedule(file.path()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.level, Some(Level::UG));
        assert_eq!(first.day, Some(Weekday::Sun));
        assert_eq!(first.exam_date, NaiveDate::from_ymd_opt(2025, 12, 18));
        assert!(first.is_lecture_entry());
        assert!(first.is_exam_entry());

        let second = &rows[1];
        assert_eq!(second.level, None);
        assert_eq!(second.staff_name, None);
        assert_eq!(second.day, None);
        assert!(!second.is_lecture_entry());
        assert!(!second.is_exam_entry());
    }

    #[test]
    fn rows_without_a_course_code_are_skipped() {
        let file = write_workbook(&[[
            "fall 2025",
            "UG",
            "",
            "1",
            "K. Al Hooti",
            "Hall 4",
            "SUN",
            "08:00AM - 08:50AM",
            "",
            "",
            "Geology I",
        ]]);

        let rows = load_schedule(file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        // Header without the Time column.
        for (col, header) in ["Data Source", "Course Code", "Day"].iter().enumerate() {
            sheet.write(0, col as u16, *header).unwrap();
        }
        workbook.save(file.path()).unwrap();

        let err = load_schedule(file.path()).unwrap_err();
        match err {
            SourceError::MissingColumn(name) => assert_eq!(name, "Time"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
