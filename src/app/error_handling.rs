//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::ReportError;
use tracing::error;

/// Exit code for failures that are not a [`ReportError`]
const GENERAL_ERROR: i32 = 1;

/// Print `error` the way the user should see it and pick the exit code.
///
/// - For `ReportError`: shows the user message always, the developer
///   message with its source chain in verbose mode
/// - For other errors: shows the error message, and the chain in verbose mode
pub fn report_fatal_error(error: &anyhow::Error, verbose: u8) -> (String, i32) {
    if let Some(report_err) = error.downcast_ref::<ReportError>() {
        let mut text = format!("Error: {}", report_err.user_message());
        if verbose >= 1 {
            text.push_str(&format!("\n\nContext Chain:\n{}", report_err.developer_message()));
        }
        (text, report_err.exit_code())
    } else {
        let mut text = format!("Error: {error}");
        if verbose >= 1 {
            text.push_str("\n\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                text.push_str(&format!("\n  {}: {}", i, cause));
            }
        }
        (text, GENERAL_ERROR)
    }
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let (text, exit_code) = report_fatal_error(&error, verbose);
    eprintln!("{text}");
    std::process::exit(exit_code)
}
