//! Plain-text rendering of tables for standard output

use crate::spreadsheet::{Cell, Sheet};
use std::fmt::Write as _;

/// Rows shown at each end of a truncated table
const EDGE_ROWS: usize = 5;

/// Render `sheet` as right-aligned columns under a header line, with a
/// `[N rows x M columns]` footer.
///
/// When the table has more than `max_rows` rows only the first and last
/// five are shown, separated by a `...` line.
pub fn render_table(sheet: &Sheet, max_rows: usize) -> String {
    let height = sheet.height();
    let truncated = height > max_rows && height > EDGE_ROWS * 2;
    let visible: Vec<&Vec<Cell>> = if truncated {
        sheet
            .rows
            .iter()
            .take(EDGE_ROWS)
            .chain(sheet.rows.iter().skip(height - EDGE_ROWS))
            .collect()
    } else {
        sheet.rows.iter().collect()
    };

    let text: Vec<Vec<String>> = visible
        .iter()
        .map(|row| row.iter().map(Cell::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = sheet.headers.iter().map(|h| h.chars().count()).collect();
    for row in &text {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    if sheet.headers.is_empty() {
        out.push_str("Empty table\n");
    } else {
        push_line(&mut out, sheet.headers.iter().map(String::as_str), &widths);
        for (i, row) in text.iter().enumerate() {
            if truncated && i == EDGE_ROWS {
                push_line(&mut out, widths.iter().map(|_| "..."), &widths);
            }
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
    }
    let _ = writeln!(out, "\n[{} rows x {} columns]", height, sheet.width());
    out
}

fn push_line<'a>(out: &mut String, values: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = values
        .zip(widths)
        .map(|(value, width)| format!("{:>width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
