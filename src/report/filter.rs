//! Last-month order selection

use crate::model::OrderTable;
use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// The boundary date one calendar month before `today`.
///
/// Day-of-month is clamped to the length of the target month, so
/// March 31 gives February 28 (or 29).
pub fn last_month_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN)
}

/// True if `date_time` falls strictly after midnight of `cutoff`.
///
/// Orders without a timestamp are never inside the window.
pub fn is_after_cutoff(date_time: Option<NaiveDateTime>, cutoff: NaiveDate) -> bool {
    let boundary = cutoff.and_time(NaiveTime::MIN);
    date_time.is_some_and(|dt| dt > boundary)
}

/// Keep only the orders placed after [`last_month_cutoff`] of `today`
pub fn retain_last_month(mut orders: OrderTable, today: NaiveDate) -> OrderTable {
    let cutoff = last_month_cutoff(today);
    let before = orders.len();
    let undated = orders.rows.iter().filter(|o| o.date_time.is_none()).count();

    orders
        .rows
        .retain(|order| is_after_cutoff(order.date_time, cutoff));

    debug!(
        "Last-month filter (after {}): kept {} of {} orders ({} without DateTime)",
        cutoff,
        orders.len(),
        before,
        undated
    );
    orders
}
