//! Report command: load the inventory, write the listing and the analysis

use std::io::Write;

use chrono::NaiveDateTime;
use colored::Colorize;
use extinv_core::{
    Analysis, Inventory, InventoryConfig, ResolvedPaths, io, load_inventory, render_listing,
};

use crate::error::{CliError, Result};

/// Outcome of a successful report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub recommended_removals: usize,
    pub kept: i64,
}

/// Run the full report pipeline.
///
/// Steps run strictly in order and the first failure aborts the run: read
/// the inventory, write the listing, compute and write the analysis.
pub fn run_report(
    config: &InventoryConfig,
    paths: &ResolvedPaths,
    generated_at: NaiveDateTime,
) -> Result<ReportSummary> {
    if paths.listing == paths.analysis {
        return Err(CliError::user(format!(
            "Listing and analysis would both be written to {}",
            paths.listing.display()
        )));
    }

    println!("{}", "Reading extensions file...".bold());
    println!("{} {}", "File path:".dimmed(), paths.input.display());

    let loaded = load_inventory(&paths.input)?;

    println!("{} {} bytes", "File size:".dimmed(), loaded.size_bytes);
    println!("{}", "JSON parsed successfully".green());

    let inventory = Inventory::from_entries(&loaded.entries);
    println!();
    println!("{} {}", "Total extensions:".bold(), inventory.len());

    let listing = render_listing(&inventory, &config.labels, generated_at);
    io::write_text(&paths.listing, &listing)?;
    tracing::info!(path = %paths.listing.display(), "wrote listing");

    println!();
    println!("{}", "Listing saved to:".green());
    println!("{}", paths.listing.display());
    println!("{} {} bytes", "File size:".dimmed(), listing.len());

    let analysis = Analysis::compute(&inventory, config.thresholds);
    let analysis_text = analysis.render(&config.labels);
    io::write_text(&paths.analysis, &analysis_text)?;
    tracing::info!(path = %paths.analysis.display(), "wrote analysis");

    println!("{}", analysis_text);
    println!();
    println!("{}", "Analysis saved to:".green());
    println!("{}", paths.analysis.display());
    std::io::stdout().flush()?;

    Ok(ReportSummary {
        total: analysis.total(),
        recommended_removals: analysis.recommended_removals(),
        kept: analysis.kept(),
    })
}
