//! Inner join of orders and order lines on `OrderId`

use crate::model::{MergedRow, MergedTable, OrderLine, OrderLineTable, OrderTable};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Join every order with each of its lines.
///
/// Output follows the orders table; lines of one order keep their file
/// order. Orders without lines and lines without an order are dropped.
pub fn inner_join(orders: &OrderTable, lines: &OrderLineTable) -> MergedTable {
    let mut by_order: HashMap<&str, Vec<&OrderLine>> = HashMap::new();
    for line in &lines.rows {
        by_order.entry(line.order_id.as_str()).or_default().push(line);
    }

    let rows: Vec<MergedRow> = orders
        .rows
        .iter()
        .flat_map(|order| {
            by_order
                .get(order.order_id.as_str())
                .into_iter()
                .flatten()
                .map(move |line| MergedRow {
                    order_id: order.order_id.clone(),
                    date_time: order.date_time,
                    product_id: line.product_id.clone(),
                    price: line.price,
                    order_extra: order.extra.clone(),
                    line_extra: line.extra.clone(),
                })
        })
        .collect();

    if rows.is_empty() && !orders.is_empty() && !lines.is_empty() {
        warn!("No order lines matched any order; merged table is empty");
    }
    debug!(
        "Joined {} orders with {} order lines into {} rows",
        orders.len(),
        lines.len(),
        rows.len()
    );

    MergedTable {
        order_columns: orders.extra_columns.clone(),
        line_columns: lines.extra_columns.clone(),
        rows,
    }
}
