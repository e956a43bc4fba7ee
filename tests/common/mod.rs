//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use order_stats::model::AggregateTable;
use order_stats::spreadsheet::{read_sheet, write_sheet, Cell, Sheet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixed "today" used by tests so the last-month window is stable
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Noon, `days` before [`as_of`]
pub fn days_ago(days: i64) -> NaiveDateTime {
    (as_of() - Duration::days(days)).and_hms_opt(12, 0, 0).unwrap()
}

/// Test context builder for setting up workbook fixtures
pub struct TestContextBuilder {
    temp_dir: TempDir,
    orders: Option<Sheet>,
    order_lines: Option<Sheet>,
    files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            orders: None,
            order_lines: None,
            files: Vec::new(),
        })
    }

    /// Write `orders.xlsx` with `OrderId`, `DateTime` and `Customer` columns
    pub fn with_orders(mut self, rows: &[(&str, Option<NaiveDateTime>)]) -> Self {
        let mut sheet = headers(&["OrderId", "DateTime", "Customer"]);
        for (id, dt) in rows {
            sheet.push_row(vec![
                Cell::from(*id),
                Cell::from(*dt),
                Cell::from(format!("customer-{id}")),
            ]);
        }
        self.orders = Some(sheet);
        self
    }

    /// Write `order_lines.xlsx` with `OrderId`, `ProductId` and `Price`
    pub fn with_order_lines(mut self, rows: &[(&str, &str, f64)]) -> Self {
        let mut sheet = headers(&["OrderId", "ProductId", "Price"]);
        for (order, product, price) in rows {
            sheet.push_row(vec![Cell::from(*order), Cell::from(*product), Cell::from(*price)]);
        }
        self.order_lines = Some(sheet);
        self
    }

    /// Write an arbitrary sheet as `orders.xlsx`
    pub fn with_orders_sheet(mut self, sheet: Sheet) -> Self {
        self.orders = Some(sheet);
        self
    }

    /// Write an arbitrary sheet as `order_lines.xlsx`
    pub fn with_order_lines_sheet(mut self, sheet: Sheet) -> Self {
        self.order_lines = Some(sheet);
        self
    }

    /// Add a plain text file
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    pub fn build(self) -> Result<TestContext> {
        let path = self.temp_dir.path();
        if let Some(orders) = &self.orders {
            write_sheet(orders, &path.join("orders.xlsx"))?;
        }
        if let Some(lines) = &self.order_lines {
            write_sheet(lines, &path.join("order_lines.xlsx"))?;
        }
        for (file, content) in &self.files {
            std::fs::write(path.join(file), content)?;
        }
        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

pub fn headers(names: &[&str]) -> Sheet {
    Sheet::new(names.iter().map(|n| n.to_string()).collect())
}

/// Test context that owns the fixture directory
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// Read `results.xlsx` back as an aggregate table
    pub fn read_results(&self) -> Result<AggregateTable> {
        let sheet = read_sheet(&self.file("results.xlsx"), None)?;
        Ok(AggregateTable::from_sheet(&sheet)?)
    }
}
