//! Benchmarks for the join and per-product aggregation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use order_stats::model::{Order, OrderLine, OrderLineTable, OrderTable};
use order_stats::report::{aggregate_by_product, inner_join};
use std::hint::black_box;

/// `orders` orders with three lines each over 50 products
fn fixture(orders: usize) -> (OrderTable, OrderLineTable) {
    let order_rows = (0..orders)
        .map(|i| Order {
            order_id: i.to_string(),
            date_time: None,
            extra: Vec::new(),
        })
        .collect();
    let line_rows = (0..orders * 3)
        .map(|i| OrderLine {
            order_id: (i / 3).to_string(),
            product_id: format!("P{}", i % 50),
            price: (i % 97) as f64 + 0.5,
            extra: Vec::new(),
        })
        .collect();

    (
        OrderTable {
            extra_columns: Vec::new(),
            rows: order_rows,
        },
        OrderLineTable {
            extra_columns: Vec::new(),
            rows: line_rows,
        },
    )
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("inner_join");

    for size in [100, 1_000, 10_000] {
        let (orders, lines) = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(inner_join(&orders, &lines)));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_by_product");

    for size in [100, 1_000, 10_000] {
        let (orders, lines) = fixture(size);
        let merged = inner_join(&orders, &lines);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(aggregate_by_product(&merged)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_join, bench_aggregate);
criterion_main!(benches);
