use super::{Cell, Sheet};
use crate::error::{ErrorCode, ReportError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, trace};

/// Read one worksheet of a workbook into a [`Sheet`].
///
/// The first row of the used range is the header. Fully empty data rows are
/// skipped. Without a sheet name the first worksheet is read.
pub fn read_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    if !path.exists() {
        return Err(ReportError::input_not_found(path));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        let code = match e {
            calamine::Error::Msg(_) => ErrorCode::INPUT_UNSUPPORTED_FORMAT,
            _ => ErrorCode::INPUT_UNREADABLE,
        };
        ReportError::input_unreadable(code, "failed to open workbook", path).with_source(e)
    })?;

    let names = workbook.sheet_names();
    let name = match sheet_name {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                ReportError::input_unreadable(
                    ErrorCode::INPUT_SHEET_NOT_FOUND,
                    format!("worksheet '{}' not found (available: {})", wanted, names.join(", ")),
                    path,
                )
            })?,
        None => names.first().cloned().ok_or_else(|| {
            ReportError::input_unreadable(
                ErrorCode::INPUT_NO_SHEETS,
                "workbook has no worksheets",
                path,
            )
        })?,
    };

    debug!("Reading worksheet '{}' from {}", name, path.display());
    let range = workbook.worksheet_range(&name).map_err(|e| {
        ReportError::input_unreadable(
            ErrorCode::INPUT_UNREADABLE,
            format!("failed to read worksheet '{}'", name),
            path,
        )
        .with_source(e)
    })?;

    let sheet = range_to_sheet(&range);
    debug!(
        "Loaded {} rows x {} columns from {}",
        sheet.height(),
        sheet.width(),
        path.display()
    );
    Ok(sheet)
}

fn range_to_sheet(range: &Range<Data>) -> Sheet {
    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(i, cell)| match data_to_cell(cell).as_key() {
                Some(name) => name,
                None => format!("column_{}", i + 1),
            })
            .collect(),
        None => return Sheet::default(),
    };

    let mut sheet = Sheet::new(headers);
    for (offset, row) in rows.enumerate() {
        let cells: Vec<Cell> = row.iter().map(data_to_cell).collect();
        if cells.iter().all(Cell::is_empty) {
            trace!("Skipping empty data row {}", offset + 1);
            continue;
        }
        sheet.push_row(cells);
    }
    sheet
}

pub(crate) fn data_to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(serial) => serial
            .as_datetime()
            .map_or_else(|| Cell::Number(serial.as_f64()), Cell::DateTime),
        Data::DateTimeIso(s) => {
            let text = Cell::Text(s.clone());
            text.as_datetime().map_or(text, Cell::DateTime)
        }
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(format!("{:?}", e)),
    }
}
