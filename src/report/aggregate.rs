//! Per-product statistics over the merged table

use crate::model::{AggregateRow, AggregateTable, MergedTable};
use std::collections::BTreeMap;
use tracing::debug;

/// Group merged rows by product.
///
/// `Count` is the number of rows in the group, `Price` the sum of their
/// prices and `avg_price` their ratio. Groups are ordered by descending
/// `Count`; equal counts are ordered by ascending `ProductId`.
pub fn aggregate_by_product(merged: &MergedTable) -> AggregateTable {
    let mut by_product: BTreeMap<&str, (usize, f64)> = BTreeMap::new();

    for row in &merged.rows {
        let group = by_product.entry(row.product_id.as_str()).or_insert((0, 0.0));
        group.0 += 1;
        group.1 += row.price;
    }

    let mut groups: Vec<(&str, usize, f64)> = by_product
        .into_iter()
        .map(|(product_id, (count, price))| (product_id, count, price))
        .collect();

    // stable: ties stay in key order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|(product_id, count, price)| AggregateRow {
            product_id: product_id.to_string(),
            count,
            price,
            avg_price: price / count as f64,
        })
        .collect();

    debug!(
        "Aggregated {} merged rows into {} products",
        merged.len(),
        rows.len()
    );
    AggregateTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MergedRow;

    fn merged(lines: &[(&str, f64)]) -> MergedTable {
        MergedTable {
            order_columns: Vec::new(),
            line_columns: Vec::new(),
            rows: lines
                .iter()
                .enumerate()
                .map(|(i, (product, price))| MergedRow {
                    order_id: i.to_string(),
                    date_time: None,
                    product_id: product.to_string(),
                    price: *price,
                    order_extra: Vec::new(),
                    line_extra: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_product_scenario() {
        let table = aggregate_by_product(&merged(&[("A", 10.0), ("A", 20.0)]));
        assert_eq!(
            table.rows,
            vec![AggregateRow {
                product_id: "A".into(),
                count: 2,
                price: 30.0,
                avg_price: 15.0,
            }]
        );
    }

    #[test]
    fn test_sorted_by_count_with_stable_ties() {
        let table = aggregate_by_product(&merged(&[
            ("C", 1.0),
            ("A", 2.0),
            ("B", 3.0),
            ("A", 4.0),
            ("B", 5.0),
            ("D", 6.0),
        ]));
        let order: Vec<_> = table
            .rows
            .iter()
            .map(|r| (r.product_id.as_str(), r.count))
            .collect();
        assert_eq!(order, vec![("A", 2), ("B", 2), ("C", 1), ("D", 1)]);
        assert_eq!(table.rows[1].price, 8.0);
        assert_eq!(table.rows[1].avg_price, 4.0);
    }

    #[test]
    fn test_ties_follow_product_id_not_encounter_order() {
        let table = aggregate_by_product(&merged(&[("B", 1.0), ("A", 2.0), ("C", 3.0)]));
        let ids: Vec<_> = table.rows.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_product(&merged(&[])).is_empty());
    }
}
