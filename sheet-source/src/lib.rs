//! FILENAME: sheet-source/src/lib.rs
//! PURPOSE: The row source - loads and normalizes the course-schedule sheet.
//! CONTEXT: Reads the XLSX export of the schedule spreadsheet and produces
//! normalized `ScheduleRow`s for the grid engine. All sentinel handling
//! ("nan", blanks, serial dates) happens here, so the core never sees a
//! marker string. A required column missing from the sheet entirely is the
//! one fatal condition; everything row-level degrades to an absent field.

pub mod error;
pub mod normalize;
pub mod xlsx_reader;

pub use error::SourceError;
pub use xlsx_reader::load_schedule;
