//! Command implementations for extinv-cli

pub mod report;

pub use report::run_report;
