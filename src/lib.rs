//! # order-stats
//!
//! Per-product sales statistics from a pair of spreadsheets.
//!
//! ## Usage
//!
//! ```bash
//! order-stats [--orders orders.xlsx] [--order-lines order_lines.xlsx] [-o results.xlsx]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error handling for the binary
//! - `cli` - Command-line argument structures
//! - `config` - Layered TOML configuration
//! - `error` - Unified error type with codes and exit statuses
//! - `model` - Typed order, order-line, merged and aggregate rows
//! - `report` - Date filter, join, aggregation and the pipeline driver
//! - `spreadsheet` - Workbook reading and writing
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod spreadsheet;
