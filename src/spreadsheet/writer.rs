use super::{Cell, Sheet, DATETIME_DISPLAY_FORMAT};
use crate::error::{ErrorCode, ErrorExt, ReportError, Result};
use std::path::Path;
use tracing::debug;

/// Extensions umya-spreadsheet can produce
const WRITABLE_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Write `sheet` to a new workbook at `path`, replacing any existing file.
///
/// Row 1 holds the headers; data rows follow in order. Text is stored as
/// text even when it looks numeric, so ids like `007` survive.
pub fn write_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if !extension
        .as_deref()
        .is_some_and(|ext| WRITABLE_EXTENSIONS.contains(&ext))
    {
        return Err(ReportError::write_failure(
            ErrorCode::WRITE_UNSUPPORTED_FORMAT,
            format!(
                "unsupported output format (expected one of: {})",
                WRITABLE_EXTENSIONS.join(", ")
            ),
            path,
        ));
    }

    let mut book = umya_spreadsheet::new_file();
    let ws = book.get_sheet_by_name_mut(DEFAULT_SHEET_NAME).ok_or_else(|| {
        ReportError::write_failure(
            ErrorCode::WRITE_GENERIC,
            format!("failed to access worksheet '{}'", DEFAULT_SHEET_NAME),
            path,
        )
    })?;

    for (col, header) in sheet.headers.iter().enumerate() {
        ws.get_cell_mut((col as u32 + 1, 1))
            .set_value_string(header.clone());
    }

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 2;
        for (col, cell) in row.iter().enumerate() {
            let target = ws.get_cell_mut((col as u32 + 1, row_num));
            match cell {
                Cell::Empty => {}
                Cell::Number(n) => {
                    target.set_value_number(*n);
                }
                Cell::DateTime(dt) => {
                    target.set_value_string(dt.format(DATETIME_DISPLAY_FORMAT).to_string());
                }
                other => {
                    target.set_value_string(other.to_string());
                }
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| e.to_string())
        .to_write_failure("failed to save workbook", path)?;

    debug!(
        "Wrote {} rows x {} columns to {}",
        sheet.height(),
        sheet.width(),
        path.display()
    );
    Ok(())
}
