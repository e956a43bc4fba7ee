//! CLI argument structures

use crate::config::CliOverrides;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Summarize last month's orders per product
#[derive(Parser, Debug)]
#[command(name = "order-stats")]
#[command(
    about = "order-stats - Per-product order count, revenue and average price from spreadsheets",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a configuration file (replaces ./order-stats.toml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Orders workbook (default: orders.xlsx)
    #[arg(long, value_name = "PATH")]
    pub orders: Option<PathBuf>,

    /// Order-lines workbook (default: order_lines.xlsx)
    #[arg(long, value_name = "PATH")]
    pub order_lines: Option<PathBuf>,

    /// Output workbook (default: results.xlsx)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Include orders of any date instead of only the last month
    #[arg(long)]
    pub all_dates: bool,

    /// Reference date for the last-month window (default: today)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Truncate printed tables longer than this many rows
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Do not print the merged and aggregate tables
    #[arg(long)]
    pub no_print: bool,
}

impl Cli {
    /// The flags that override configuration files
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            orders: self.orders.clone(),
            order_lines: self.order_lines.clone(),
            output: self.output.clone(),
            all_dates: self.all_dates,
            as_of: self.as_of,
            max_display_rows: self.max_rows,
            no_print: self.no_print,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2026-10-16: {e}"))
}
