//! The order report pipeline
//!
//! Load orders and order lines, keep last month's orders, join the two
//! tables on `OrderId`, aggregate per product and write the result:
//!
//! ```text
//! load_and_merge -> aggregate_by_product -> write_sheet
//! ```

pub mod aggregate;
pub mod display;
pub mod filter;
pub mod merge;

pub use aggregate::aggregate_by_product;
pub use display::render_table;
pub use filter::{last_month_cutoff, retain_last_month};
pub use merge::inner_join;

use crate::config::ReportConfig;
use crate::error::{ErrorCode, ReportError, Result};
use crate::model::{AggregateTable, MergedTable, OrderLineTable, OrderTable};
use crate::spreadsheet::{read_sheet, write_sheet};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Where the input tables come from
#[derive(Debug, Clone, Copy)]
pub struct MergeInputs<'a> {
    pub orders: &'a Path,
    pub orders_sheet: Option<&'a str>,
    pub order_lines: &'a Path,
    pub order_lines_sheet: Option<&'a str>,
}

/// Outcome of a full report run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub merged_rows: usize,
    pub products: usize,
    pub output: PathBuf,
    pub elapsed: Duration,
}

/// Read both workbooks, optionally keep only orders from the month before
/// `filter_as_of`, and join them.
pub fn load_and_merge(inputs: MergeInputs<'_>, filter_as_of: Option<NaiveDate>) -> Result<MergedTable> {
    let orders = OrderTable::from_sheet(&read_sheet(inputs.orders, inputs.orders_sheet)?)?;
    info!("Loaded {} orders from {}", orders.len(), inputs.orders.display());

    let orders = match filter_as_of {
        Some(today) => retain_last_month(orders, today),
        None => orders,
    };

    let lines =
        OrderLineTable::from_sheet(&read_sheet(inputs.order_lines, inputs.order_lines_sheet)?)?;
    info!(
        "Loaded {} order lines from {}",
        lines.len(),
        inputs.order_lines.display()
    );

    Ok(inner_join(&orders, &lines))
}

/// Write the aggregate table to `path`
pub fn save_results(results: &AggregateTable, path: &Path) -> Result<()> {
    write_sheet(&results.to_sheet(), path)?;
    info!("Wrote {} products to {}", results.len(), path.display());
    Ok(())
}

/// Run the whole pipeline, printing the merged table, the aggregate table
/// and the elapsed seconds to `out`.
pub fn run(config: &ReportConfig, out: &mut dyn Write) -> Result<RunSummary> {
    let started = Instant::now();

    let inputs = MergeInputs {
        orders: &config.orders,
        orders_sheet: config.orders_sheet.as_deref(),
        order_lines: &config.order_lines,
        order_lines_sheet: config.order_lines_sheet.as_deref(),
    };
    let filter_as_of = config
        .filter_last_month
        .then(|| config.reference_date());
    if let Some(today) = filter_as_of {
        info!(
            "Keeping orders placed after {} (as of {})",
            last_month_cutoff(today),
            today
        );
    }

    let merged = load_and_merge(inputs, filter_as_of)?;
    if merged.is_empty() {
        warn!("Merged table is empty; results will contain only a header row");
    }
    if config.print_tables {
        emit(out, &render_table(&merged.to_sheet(), config.max_display_rows))?;
    }

    let results = aggregate_by_product(&merged);
    if config.print_tables {
        emit(out, &render_table(&results.to_sheet(), config.max_display_rows))?;
    }

    save_results(&results, &config.output)?;

    let elapsed = started.elapsed();
    emit(out, &format!("{}\n", elapsed.as_secs_f64()))?;

    Ok(RunSummary {
        merged_rows: merged.len(),
        products: results.len(),
        output: config.output.clone(),
        elapsed,
    })
}

fn emit(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| {
            ReportError::other_with_code(
                ErrorCode::OTHER_OUTPUT_STREAM,
                "failed to write report to standard output",
            )
            .with_source(e)
        })
}
