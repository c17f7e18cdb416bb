//! Text reports rendered from an inventory
//!
//! Two documents come out of a run:
//!
//! - the listing: every extension in a fixed-width table, then category counts
//! - the analysis: seven cleanup findings and a removal tally

mod analysis;
mod listing;
mod table;

pub use analysis::Analysis;
pub use listing::{TIMESTAMP_FORMAT, render_listing};
pub use table::{
    ELLIPSIS, ID_KEEP, ID_LIMIT, NAME_KEEP, NAME_LIMIT, RULE_WIDTH, rule, truncate_cell,
};

use crate::config::{ReportLabels, Thresholds};
use crate::inventory::Inventory;

/// Render the analysis document for an inventory.
pub fn render_analysis(
    inventory: &Inventory,
    thresholds: Thresholds,
    labels: &ReportLabels,
) -> String {
    Analysis::compute(inventory, thresholds).render(labels)
}
