//! FILENAME: sheet-source/src/normalize.rs
//! PURPOSE: Cell normalization - raw sheet cells to typed optional values.
//! CONTEXT: The sheet carries "nan" markers and blank cells for missing
//! values, numbers where text is expected (section numbers), and dates as
//! either serial datetimes or strings. Everything is folded into Option
//! here, at the boundary.

use calamine::Data;
use chrono::NaiveDate;

/// Date string formats accepted besides serial datetimes.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Extracts the text of a cell, treating blanks and the "nan" sentinel as
/// absent. Numeric cells render without a trailing ".0" so section numbers
/// read naturally.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => return None,
        Data::DateTime(dt) => dt.as_f64().to_string(),
    };
    if text.is_empty() || text.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(text)
    }
}

/// Extracts a calendar date from a cell: serial datetimes directly, strings
/// against the accepted formats.
pub fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        _ => {
            let text = cell_text(cell)?;
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
        }
    }
}
