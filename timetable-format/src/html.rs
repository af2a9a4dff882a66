//! FILENAME: timetable-format/src/html.rs
//! PURPOSE: HTML document assembly for grid and table views.

use grid_engine::{ScheduleGrid, TableView, CELL_SEPARATOR};

/// Stylesheet of the rendered document. Cell text keeps its internal
/// newlines (`pre-line`); the dashed `hr` is the visual form of the cell
/// separator.
const STYLE: &str = "\
  table { width:100%; border-collapse: collapse; min-height: 100vh; }\n\
  th, td { border: 1px solid #ddd; padding: 8px; vertical-align: top; white-space: pre-line; text-align: center; }\n\
  th { background-color: #333; color: #fff; }\n\
  td { background-color: #f9f9f9; color: #333; }\n\
  hr { border: 0; border-top: 1px dashed #666; width: 100%; margin: 4px 0; }\n";

const DIVIDER: &str = r#"<hr style="border-top:1px dashed #666; width:100%; margin:4px 0;">"#;

/// Renders a built grid as a standalone HTML document.
///
/// `corner_label` names the row axis in the top-left header cell ("Time"
/// for lectures, "Exam Time" for exams).
pub fn render_grid_html(grid: &ScheduleGrid, corner_label: &str) -> String {
    let mut headers = String::new();
    headers.push_str(&format!("<th>{}</th>", escape(corner_label)));
    for label in &grid.col_labels {
        headers.push_str(&format!("<th>{}</th>", escape(label)));
    }

    let mut body = String::new();
    for (ri, row_label) in grid.row_labels.iter().enumerate() {
        body.push_str("<tr>");
        body.push_str(&format!("<td>{}</td>", escape(row_label)));
        for cell in &grid.cells[ri] {
            body.push_str(&format!("<td>{}</td>", cell_html(cell)));
        }
        body.push_str("</tr>");
    }

    document(&headers, &body)
}

/// Renders a flat table view as a standalone HTML document.
pub fn render_table_html(table: &TableView) -> String {
    let mut headers = String::new();
    for header in &table.headers {
        headers.push_str(&format!("<th>{}</th>", escape(header)));
    }

    let mut body = String::new();
    for row in &table.rows {
        body.push_str("<tr>");
        for cell in row {
            body.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        body.push_str("</tr>");
    }

    document(&headers, &body)
}

/// Renders the no-exam course listing as an HTML fragment. Empty input
/// renders nothing, so the host can always append the result.
pub fn render_no_exam_list(courses: &[String]) -> String {
    if courses.is_empty() {
        return String::new();
    }
    let mut out = String::from("<p><strong>Courses without Final Exam:</strong></p>\n<ul>\n");
    for course in courses {
        out.push_str(&format!("  <li>{}</li>\n", escape(course)));
    }
    out.push_str("</ul>\n");
    out
}

/// Splits a merged cell on the structural separator and joins the parts
/// with the visual divider.
fn cell_html(cell: &str) -> String {
    cell.split(CELL_SEPARATOR)
        .map(escape)
        .collect::<Vec<_>>()
        .join(DIVIDER)
}

fn document(headers: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{STYLE}</style>\n</head>\n<body>\n  \
         <table>\n    <thead><tr>{headers}</tr></thead>\n    <tbody>{body}</tbody>\n  \
         </table>\n</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
