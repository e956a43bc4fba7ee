//! Report configuration
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults (`orders.xlsx`, `order_lines.xlsx`, `results.xlsx`,
//!    last-month filter on)
//! 2. Global config file (`<config dir>/order-stats/config.toml`)
//! 3. Project config file (`order-stats.toml` in the working directory), or
//!    an explicit `--config` file in its place
//! 4. Command-line flags

use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod loader;

pub use loader::ConfigLoader;

/// Name of the per-directory config file
pub const PROJECT_CONFIG_FILE: &str = "order-stats.toml";

pub const DEFAULT_ORDERS_FILE: &str = "orders.xlsx";
pub const DEFAULT_ORDER_LINES_FILE: &str = "order_lines.xlsx";
pub const DEFAULT_OUTPUT_FILE: &str = "results.xlsx";
pub const DEFAULT_MAX_DISPLAY_ROWS: usize = 60;

/// Location of the global config file, if a home directory can be found
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "order-stats", "order-stats")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub orders: PathBuf,
    pub order_lines: PathBuf,
    pub output: PathBuf,
    /// Worksheet to read from the orders workbook (first sheet if unset)
    pub orders_sheet: Option<String>,
    pub order_lines_sheet: Option<String>,
    pub filter_last_month: bool,
    /// Reference date for the filter; today's local date if unset
    pub as_of: Option<NaiveDate>,
    pub max_display_rows: usize,
    pub print_tables: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            orders: PathBuf::from(DEFAULT_ORDERS_FILE),
            order_lines: PathBuf::from(DEFAULT_ORDER_LINES_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            orders_sheet: None,
            order_lines_sheet: None,
            filter_last_month: true,
            as_of: None,
            max_display_rows: DEFAULT_MAX_DISPLAY_ROWS,
            print_tables: true,
        }
    }
}

/// One config file layer; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub orders: Option<PathBuf>,
    pub order_lines: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub orders_sheet: Option<String>,
    pub order_lines_sheet: Option<String>,
    pub filter_last_month: Option<bool>,
    /// Either a TOML date (`as_of = 2026-10-16`) or a `YYYY-MM-DD` string
    #[serde(default, deserialize_with = "deserialize_as_of")]
    pub as_of: Option<NaiveDate>,
    pub max_display_rows: Option<usize>,
    pub print_tables: Option<bool>,
}

fn deserialize_as_of<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateValue {
        Toml(toml::value::Datetime),
        Text(String),
    }

    let Some(value) = Option::<DateValue>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = match value {
        DateValue::Toml(datetime) => datetime.to_string(),
        DateValue::Text(text) => text,
    };
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| de::Error::custom(format!("as_of must be a date like 2026-10-16, got '{text}': {e}")))
}

/// Settings given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub orders: Option<PathBuf>,
    pub order_lines: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub all_dates: bool,
    pub as_of: Option<NaiveDate>,
    pub max_display_rows: Option<usize>,
    pub no_print: bool,
}

impl ReportConfig {
    /// Apply a config file layer on top of the current settings
    pub fn merge_file(&mut self, file: ConfigFile) {
        if let Some(orders) = file.orders {
            self.orders = orders;
        }
        if let Some(order_lines) = file.order_lines {
            self.order_lines = order_lines;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if file.orders_sheet.is_some() {
            self.orders_sheet = file.orders_sheet;
        }
        if file.order_lines_sheet.is_some() {
            self.order_lines_sheet = file.order_lines_sheet;
        }
        if let Some(filter) = file.filter_last_month {
            self.filter_last_month = filter;
        }
        if file.as_of.is_some() {
            self.as_of = file.as_of;
        }
        if let Some(rows) = file.max_display_rows {
            self.max_display_rows = rows;
        }
        if let Some(print) = file.print_tables {
            self.print_tables = print;
        }
    }

    /// Apply command-line flags, the highest-precedence layer
    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(orders) = overrides.orders {
            self.orders = orders;
        }
        if let Some(order_lines) = overrides.order_lines {
            self.order_lines = order_lines;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.all_dates {
            self.filter_last_month = false;
        }
        if overrides.as_of.is_some() {
            self.as_of = overrides.as_of;
        }
        if let Some(rows) = overrides.max_display_rows {
            self.max_display_rows = rows;
        }
        if overrides.no_print {
            self.print_tables = false;
        }
    }

    /// Make relative file paths relative to `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.orders, &mut self.order_lines, &mut self.output] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// The date the last-month window ends on
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
