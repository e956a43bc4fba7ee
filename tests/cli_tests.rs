//! Integration tests for the command-line binary

mod common;

use assert_cmd::Command;
use common::{days_ago, TestContextBuilder};
use predicates::prelude::*;

fn order_stats() -> Command {
    Command::cargo_bin("order-stats").unwrap()
}

#[test]
fn test_cli_help_flag() {
    order_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--all-dates"));
}

#[test]
fn test_default_run_in_working_directory() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_orders(&[("1", Some(days_ago(2))), ("2", Some(days_ago(40)))])
        .with_order_lines(&[("1", "A", 10.0), ("1", "A", 20.0), ("2", "B", 5.0)])
        .build()
        .unwrap();

    order_stats()
        .current_dir(ctx.path())
        .args(["--as-of", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2 rows x 5 columns]"))
        .stdout(predicate::str::contains("[1 rows x 4 columns]"))
        .stdout(predicate::str::is_match(r"\n\d+(\.\d+)?\n$").unwrap());

    let results = ctx.read_results().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results.rows[0].avg_price, 15.0);
}

#[test]
fn test_output_flag_and_all_dates() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_orders(&[("1", Some(days_ago(90)))])
        .with_order_lines(&[("1", "A", 10.0)])
        .build()
        .unwrap();

    order_stats()
        .current_dir(ctx.path())
        .args(["--all-dates", "--no-print", "-o", "summary.xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ProductId").not());

    assert!(ctx.file_exists("summary.xlsx"));
    assert!(!ctx.file_exists("results.xlsx"));
}

#[test]
fn test_project_config_file_is_used() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_orders(&[("1", Some(days_ago(5)))])
        .with_order_lines(&[("1", "A", 10.0)])
        .with_file(
            "order-stats.toml",
            "output = \"from-config.xlsx\"\nas_of = \"2026-10-16\"\n",
        )
        .build()
        .unwrap();

    order_stats().current_dir(ctx.path()).assert().success();
    assert!(ctx.file_exists("from-config.xlsx"));
}

#[test]
fn test_missing_input_exit_code() {
    let ctx = TestContextBuilder::new().unwrap().build().unwrap();

    order_stats()
        .current_dir(ctx.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_unsupported_output_exit_code() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_orders(&[("1", Some(days_ago(1)))])
        .with_order_lines(&[("1", "A", 1.0)])
        .build()
        .unwrap();

    order_stats()
        .current_dir(ctx.path())
        .args(["--as-of", "2026-10-16", "-o", "results.csv", "-v"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Context Chain:"));
}

#[test]
fn test_bad_config_exit_code() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_file("order-stats.toml", "not valid = = toml")
        .build()
        .unwrap();

    order_stats()
        .current_dir(ctx.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_invalid_flag() {
    order_stats()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
