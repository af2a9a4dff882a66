//! FILENAME: grid-engine/src/view.rs
//! PURPOSE: Schedule grid view - renderable output for the frontend.
//! CONTEXT: The grid is derived and transient: it is rebuilt from scratch on
//! every filter change and never mutated incrementally. Cells are complete
//! over rows x cols, with empty string where no source row mapped.

use serde::{Deserialize, Serialize};

/// The complete rendered timetable grid.
///
/// Row labels are time-slot labels; column labels are weekday names
/// (lecture) or ISO dates (exam). `cells` is row-major and always
/// `row_labels.len() x col_labels.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    /// Ordered row-axis labels.
    pub row_labels: Vec<String>,

    /// Ordered column-axis labels.
    pub col_labels: Vec<String>,

    /// Cell display strings, indexed as cells[row][col].
    pub cells: Vec<Vec<String>>,

    /// Source rows that could not be placed because a grouping key was
    /// missing. Informational only; the drop itself is silent.
    pub dropped_rows: usize,
}

impl ScheduleGrid {
    /// Creates a grid with no axes and no cells.
    pub fn empty() -> Self {
        ScheduleGrid {
            row_labels: Vec::new(),
            col_labels: Vec::new(),
            cells: Vec::new(),
            dropped_rows: 0,
        }
    }

    /// Whether the grid has no placed entries at all.
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_labels.len()
    }

    /// Looks a cell up by its axis labels. Returns None when either label is
    /// not on the corresponding axis.
    pub fn cell(&self, row_label: &str, col_label: &str) -> Option<&str> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        let col = self.col_labels.iter().position(|l| l == col_label)?;
        Some(self.cells[row][col].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_axes() {
        let grid = ScheduleGrid::empty();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.col_count(), 0);
        assert_eq!(grid.cell("08:00AM - 08:50AM", "SUN"), None);
    }

    #[test]
    fn cell_lookup_uses_axis_labels() {
        let grid = ScheduleGrid {
            row_labels: vec!["08:00AM - 08:50AM".to_string()],
            col_labels: vec!["SUN".to_string(), "MON".to_string()],
            cells: vec![vec!["GEOL2101 (1)".to_string(), String::new()]],
            dropped_rows: 0,
        };
        assert_eq!(grid.cell("08:00AM - 08:50AM", "SUN"), Some("GEOL2101 (1)"));
        assert_eq!(grid.cell("08:00AM - 08:50AM", "MON"), Some(""));
        assert_eq!(grid.cell("08:00AM - 08:50AM", "FRI"), None);
    }
}
