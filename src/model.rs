//! Typed row records for the report pipeline
//!
//! Orders and order lines are lifted out of raw [`Sheet`]s here, with the
//! expected columns checked up front. Columns the pipeline does not interpret
//! are kept as `extra` cells so they can still be printed with the merged
//! table.

use crate::error::{ErrorCode, ReportError, Result};
use crate::spreadsheet::{Cell, Sheet};
use chrono::NaiveDateTime;

pub const ORDER_ID: &str = "OrderId";
pub const DATE_TIME: &str = "DateTime";
pub const PRODUCT_ID: &str = "ProductId";
pub const PRICE: &str = "Price";
pub const COUNT: &str = "Count";
pub const AVG_PRICE: &str = "avg_price";

const ORDERS_TABLE: &str = "orders";
const ORDER_LINES_TABLE: &str = "order lines";

/// Suffix for an order-line column whose name is already used by the orders table
const LINE_COLUMN_SUFFIX: &str = "_line";
const ORDER_COLUMN_SUFFIX: &str = "_order";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub date_time: Option<NaiveDateTime>,
    pub extra: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderTable {
    pub extra_columns: Vec<String>,
    pub rows: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_id: String,
    pub product_id: String,
    pub price: f64,
    pub extra: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLineTable {
    pub extra_columns: Vec<String>,
    pub rows: Vec<OrderLine>,
}

/// One (order, order line) pair produced by the join
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub order_id: String,
    pub date_time: Option<NaiveDateTime>,
    pub product_id: String,
    pub price: f64,
    pub order_extra: Vec<Cell>,
    pub line_extra: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedTable {
    pub order_columns: Vec<String>,
    pub line_columns: Vec<String>,
    pub rows: Vec<MergedRow>,
}

/// Per-product statistics
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub product_id: String,
    pub count: usize,
    /// Sum of line prices
    pub price: f64,
    pub avg_price: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateTable {
    pub rows: Vec<AggregateRow>,
}

/// Column positions of a sheet split into the ones we interpret and the rest
struct Columns {
    known: Vec<usize>,
    extra: Vec<usize>,
}

impl Columns {
    fn locate(sheet: &Sheet, table: &str, required: &[&str]) -> Result<Self> {
        if sheet.headers.is_empty() {
            return Err(ReportError::schema_with_code(
                ErrorCode::SCHEMA_EMPTY_SHEET,
                "worksheet has no header row",
                table,
            ));
        }

        let known = required
            .iter()
            .map(|name| {
                sheet
                    .column_index(name)
                    .ok_or_else(|| ReportError::missing_column(table, *name))
            })
            .collect::<Result<Vec<_>>>()?;
        let extra = (0..sheet.width()).filter(|i| !known.contains(i)).collect();

        Ok(Self { known, extra })
    }

    fn extra_names(&self, sheet: &Sheet) -> Vec<String> {
        self.extra.iter().map(|&i| sheet.headers[i].clone()).collect()
    }

    fn extra_cells(&self, row: &[Cell]) -> Vec<Cell> {
        self.extra.iter().map(|&i| row[i].clone()).collect()
    }
}

/// Spreadsheet row number of data row `idx` (1-based, header is row 1)
fn sheet_row(idx: usize) -> usize {
    idx + 2
}

fn require_key(cell: &Cell, table: &str, column: &str, idx: usize) -> Result<String> {
    cell.as_key().ok_or_else(|| {
        ReportError::invalid_value(
            ErrorCode::VALUE_MISSING,
            "identifier cell is empty",
            table,
            column,
            sheet_row(idx),
        )
    })
}

impl OrderTable {
    /// Build typed orders from a sheet with `OrderId` and `DateTime` columns.
    ///
    /// An empty `DateTime` is kept as `None`; anything else that is not a
    /// date is rejected.
    pub fn from_sheet(sheet: &Sheet) -> Result<Self> {
        let columns = Columns::locate(sheet, ORDERS_TABLE, &[ORDER_ID, DATE_TIME])?;
        let (id_col, dt_col) = (columns.known[0], columns.known[1]);

        let rows = sheet
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let order_id = require_key(&row[id_col], ORDERS_TABLE, ORDER_ID, idx)?;
                let cell = &row[dt_col];
                let date_time = if cell.is_empty() {
                    None
                } else {
                    Some(cell.as_datetime().ok_or_else(|| {
                        ReportError::invalid_value(
                            ErrorCode::VALUE_BAD_DATE,
                            format!("'{}' is not a date", cell),
                            ORDERS_TABLE,
                            DATE_TIME,
                            sheet_row(idx),
                        )
                    })?)
                };

                Ok(Order {
                    order_id,
                    date_time,
                    extra: columns.extra_cells(row),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extra_columns: columns.extra_names(sheet),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl OrderLineTable {
    /// Build typed order lines from a sheet with `OrderId`, `ProductId` and
    /// a numeric `Price` column.
    pub fn from_sheet(sheet: &Sheet) -> Result<Self> {
        let columns = Columns::locate(sheet, ORDER_LINES_TABLE, &[ORDER_ID, PRODUCT_ID, PRICE])?;
        let (id_col, product_col, price_col) =
            (columns.known[0], columns.known[1], columns.known[2]);

        let rows = sheet
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let order_id = require_key(&row[id_col], ORDER_LINES_TABLE, ORDER_ID, idx)?;
                let product_id =
                    require_key(&row[product_col], ORDER_LINES_TABLE, PRODUCT_ID, idx)?;
                let price = row[price_col].as_number().ok_or_else(|| {
                    ReportError::invalid_value(
                        ErrorCode::VALUE_NOT_NUMERIC,
                        format!("'{}' is not a number", row[price_col]),
                        ORDER_LINES_TABLE,
                        PRICE,
                        sheet_row(idx),
                    )
                })?;

                Ok(OrderLine {
                    order_id,
                    product_id,
                    price,
                    extra: columns.extra_cells(row),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extra_columns: columns.extra_names(sheet),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl MergedTable {
    /// Column names in output order. Order extras named `ProductId` or
    /// `Price` get an `_order` suffix; order-line extras that collide with an
    /// order column get a `_line` suffix.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![ORDER_ID.to_string(), DATE_TIME.to_string()];
        for name in &self.order_columns {
            if name == PRODUCT_ID || name == PRICE {
                headers.push(format!("{}{}", name, ORDER_COLUMN_SUFFIX));
            } else {
                headers.push(name.clone());
            }
        }
        headers.push(PRODUCT_ID.to_string());
        headers.push(PRICE.to_string());
        for name in &self.line_columns {
            if headers.contains(name) {
                headers.push(format!("{}{}", name, LINE_COLUMN_SUFFIX));
            } else {
                headers.push(name.clone());
            }
        }
        headers
    }

    pub fn to_sheet(&self) -> Sheet {
        let mut sheet = Sheet::new(self.headers());
        for row in &self.rows {
            let mut cells = vec![
                Cell::from(row.order_id.clone()),
                Cell::from(row.date_time),
            ];
            cells.extend(row.order_extra.iter().cloned());
            cells.push(Cell::from(row.product_id.clone()));
            cells.push(Cell::from(row.price));
            cells.extend(row.line_extra.iter().cloned());
            sheet.push_row(cells);
        }
        sheet
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl AggregateTable {
    pub fn headers() -> Vec<String> {
        [PRODUCT_ID, COUNT, PRICE, AVG_PRICE]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn to_sheet(&self) -> Sheet {
        let mut sheet = Sheet::new(Self::headers());
        for row in &self.rows {
            sheet.push_row(vec![
                Cell::from(row.product_id.clone()),
                Cell::from(row.count),
                Cell::from(row.price),
                Cell::from(row.avg_price),
            ]);
        }
        sheet
    }

    /// Read an aggregate table back from a written sheet
    pub fn from_sheet(sheet: &Sheet) -> Result<Self> {
        const TABLE: &str = "results";
        let columns = Columns::locate(sheet, TABLE, &[PRODUCT_ID, COUNT, PRICE, AVG_PRICE])?;

        let number = |row: &[Cell], col: usize, name: &str, idx: usize| {
            row[col].as_number().ok_or_else(|| {
                ReportError::invalid_value(
                    ErrorCode::VALUE_NOT_NUMERIC,
                    format!("'{}' is not a number", row[col]),
                    TABLE,
                    name,
                    sheet_row(idx),
                )
            })
        };

        let rows = sheet
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                Ok(AggregateRow {
                    product_id: require_key(&row[columns.known[0]], TABLE, PRODUCT_ID, idx)?,
                    count: number(row, columns.known[1], COUNT, idx)? as usize,
                    price: number(row, columns.known[2], PRICE, idx)?,
                    avg_price: number(row, columns.known[3], AVG_PRICE, idx)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
