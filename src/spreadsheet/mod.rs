//! Spreadsheet I/O
//!
//! A [`Sheet`] is the crate's generic table: one header row and any number of
//! data rows of [`Cell`]s. Workbooks are read with calamine and written with
//! umya-spreadsheet.

pub mod reader;
pub mod writer;

pub use reader::read_sheet;
pub use writer::write_sheet;

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Datetime layouts accepted in text cells, most specific first
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Format used when a datetime is rendered or written as text
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single spreadsheet cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// A formula error such as `#DIV/0!`
    Error(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Normalize the cell into a join/group key.
    ///
    /// Integral numbers drop their fractional part so that `101.0` read from
    /// one workbook matches the text `101` read from another.
    pub fn as_key(&self) -> Option<String> {
        match self {
            Cell::Empty | Cell::Error(_) => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Bool(_) => Some(self.to_string()),
            Cell::DateTime(dt) => Some(dt.format(DATETIME_DISPLAY_FORMAT).to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Interpret the cell as a timestamp. Plain dates are taken as midnight.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            Cell::Text(s) => parse_datetime(s.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => f.write_str(&format_number(*n)),
            Cell::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Cell::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_DISPLAY_FORMAT)),
            Cell::Error(e) => write!(f, "#ERROR:{}", e),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::DateTime(value)
    }
}

impl From<Option<NaiveDateTime>> for Cell {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(Cell::Empty, Cell::DateTime)
    }
}

/// Render a float without a trailing `.0` when it is integral
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() <= 9_007_199_254_740_992.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// A header row plus data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_numeric_keys_drop_fraction() {
        assert_eq!(Cell::Number(101.0).as_key().as_deref(), Some("101"));
        assert_eq!(Cell::Number(1.5).as_key().as_deref(), Some("1.5"));
        assert_eq!(Cell::from(" 101 ").as_key().as_deref(), Some("101"));
        assert_eq!(Cell::from("   ").as_key(), None);
        assert_eq!(Cell::Empty.as_key(), None);
    }

    #[test]
    fn test_bool_key_matches_written_text() {
        let cell = Cell::Bool(true);
        assert_eq!(cell.as_key().as_deref(), Some("TRUE"));
        assert_eq!(cell.as_key(), Some(cell.to_string()));
        assert_eq!(Cell::Bool(false).as_key().as_deref(), Some("FALSE"));
    }

    #[test]
    fn test_as_number_accepts_numeric_text() {
        assert_eq!(Cell::Number(10.0).as_number(), Some(10.0));
        assert_eq!(Cell::from("12.50").as_number(), Some(12.5));
        assert_eq!(Cell::from("abc").as_number(), None);
        assert_eq!(Cell::from("NaN").as_number(), None);
        assert_eq!(Cell::Bool(true).as_number(), None);
    }

    #[test]
    fn test_as_datetime_formats() {
        assert_eq!(
            Cell::from("2026-10-14").as_datetime(),
            Some(dt(2026, 10, 14, 0, 0, 0))
        );
        assert_eq!(
            Cell::from("2026-10-14 09:30:15").as_datetime(),
            Some(dt(2026, 10, 14, 9, 30, 15))
        );
        assert_eq!(
            Cell::from("2026-10-14T09:30:15.250").as_datetime().map(|d| d.date()),
            NaiveDate::from_ymd_opt(2026, 10, 14)
        );
        assert_eq!(
            Cell::from("2026-10-14 09:30").as_datetime(),
            Some(dt(2026, 10, 14, 9, 30, 0))
        );
        assert_eq!(Cell::from("14/10/2026").as_datetime(), None);
        assert_eq!(Cell::Number(45000.0).as_datetime(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Number(30.0).to_string(), "30");
        assert_eq!(Cell::Number(12.5).to_string(), "12.5");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Bool(false).to_string(), "FALSE");
        assert_eq!(
            Cell::DateTime(dt(2026, 1, 2, 3, 4, 5)).to_string(),
            "2026-01-02 03:04:05"
        );
    }

    #[test]
    fn test_push_row_pads_to_header_width() {
        let mut sheet = Sheet::new(vec!["a".into(), "b".into(), "c".into()]);
        sheet.push_row(vec![Cell::from("x")]);
        sheet.push_row(vec![
            Cell::from("1"),
            Cell::from("2"),
            Cell::from("3"),
            Cell::from("4"),
        ]);

        assert_eq!(sheet.rows[0], vec![Cell::from("x"), Cell::Empty, Cell::Empty]);
        assert_eq!(sheet.rows[1].len(), 3);
        assert_eq!(sheet.column_index("b"), Some(1));
        assert_eq!(sheet.column_index("z"), None);
    }
}
