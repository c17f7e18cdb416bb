//! Top-level failure reporting
//!
//! A failed run prints the error with its causes and a backtrace, then tries
//! to leave the same text in the error log. Problems writing the log are
//! ignored.

use std::backtrace::Backtrace;
use std::error::Error as _;
use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use crate::error::CliError;

/// Render an error, its cause chain and a backtrace.
pub fn render(err: &CliError) -> String {
    let mut text = format!("Error: {err}\n");

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(text, "  caused by: {cause}");
        source = cause.source();
    }

    let _ = write!(text, "\nBacktrace:\n{}\n", Backtrace::force_capture());
    text
}

/// Print the failure and save it to `error_log`.
pub fn report(err: &CliError, error_log: &Path) {
    let text = render(err);

    println!("{}", "error".red().bold());
    println!("{text}");

    if let Err(e) = extinv_core::io::write_text(error_log, &text) {
        tracing::debug!(path = %error_log.display(), error = %e, "could not write error log");
    }
}
