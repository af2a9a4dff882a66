//! FILENAME: timetable-format/src/lib.rs
//! PURPOSE: HTML rendering of built grids and table views.
//! CONTEXT: The last hop before the embedding UI: a `ScheduleGrid` or
//! `TableView` becomes a standalone HTML document the host can drop into a
//! frame. Merged-cell entries are split on the structural separator and
//! joined with a dashed divider; newlines inside entries are preserved by
//! the `pre-line` whitespace rule in the stylesheet.

pub mod html;

pub use html::{render_grid_html, render_no_exam_list, render_table_html};
